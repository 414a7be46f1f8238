/// Cosine similarity in `[-1, 1]`. Zero-norm vectors and mismatched lengths
/// score 0.
pub fn cosine_similarity(vec1: &[f32], vec2: &[f32]) -> f32 {
    if vec1.len() != vec2.len() || vec1.is_empty() {
        return 0.0;
    }
    let dot: f32 = vec1.iter().zip(vec2).map(|(a, b)| a * b).sum();
    let norm1: f32 = (vec1.iter().map(|x| x * x).sum::<f32>()).sqrt();
    let norm2: f32 = (vec2.iter().map(|x| x * x).sum::<f32>()).sqrt();
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }
    (dot / (norm1 * norm2)).clamp(-1.0, 1.0)
}

/// Whole percentage for display, e.g. `0.876` becomes `88%`.
pub fn percent(score: f32) -> String {
    format!("{:.0}%", (score * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = [0.3, -0.2, 0.9];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_inputs_score_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn opposite_vectors_score_minus_one() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0.876), "88%");
        assert_eq!(percent(1.0), "100%");
    }
}
