//! Random vector generation for the kNN examples.

use rand::Rng;

/// Generates a random feature vector of the given dimensionality.
///
/// Components are drawn uniformly from `[0, 1)`, matching the value range of
/// the feature vectors in the sample data.
pub fn random_float_vector(dimension: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..dimension).map(|_| rng.gen::<f32>()).collect()
}

/// Generates a random `f64` vector of the given dimensionality, components in `[0, 1)`.
pub fn random_double_vector(dimension: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..dimension).map(|_| rng.gen::<f64>()).collect()
}

/// Generates a random `i32` vector of the given dimensionality.
pub fn random_int_vector(dimension: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..dimension).map(|_| rng.gen::<i32>()).collect()
}

/// Generates a random `i64` vector of the given dimensionality.
pub fn random_long_vector(dimension: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..dimension).map(|_| rng.gen::<i64>()).collect()
}

/// Returns an iterator yielding `count` random float vectors of the given
/// dimensionality.
pub fn random_float_vectors(dimension: usize, count: usize) -> impl Iterator<Item = Vec<f32>> {
    std::iter::repeat_with(move || random_float_vector(dimension)).take(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_float_vector_dimension() {
        let v = random_float_vector(144);
        assert_eq!(v.len(), 144);
    }

    #[test]
    fn test_random_float_vector_range() {
        let v = random_float_vector(576);
        assert!(v.iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn test_random_float_vector_empty() {
        assert!(random_float_vector(0).is_empty());
    }

    #[test]
    fn test_random_double_vector_range() {
        let v = random_double_vector(64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn test_random_int_and_long_vector_dimensions() {
        assert_eq!(random_int_vector(8).len(), 8);
        assert_eq!(random_long_vector(8).len(), 8);
    }

    #[test]
    fn test_random_float_vectors_count() {
        let vectors: Vec<_> = random_float_vectors(64, 5).collect();
        assert_eq!(vectors.len(), 5);
        assert!(vectors.iter().all(|v| v.len() == 64));
    }
}
