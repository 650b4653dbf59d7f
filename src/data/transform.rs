/// First difference of `samples`, with a leading 0 in place of the undefined
/// first element. Widened to `i32` so no difference of two `i16` can wrap.
pub fn difference(samples: &[i16]) -> Vec<i32> {
    let mut out = Vec::with_capacity(samples.len());
    if samples.is_empty() {
        return out;
    }
    out.push(0);
    out.extend(
        samples
            .windows(2)
            .map(|w| i32::from(w[1]) - i32::from(w[0])),
    );
    out
}

/// Running prefix sum of `samples`; element i is the sum of `samples[..=i]`.
pub fn integrate(samples: &[i16]) -> Vec<i64> {
    samples
        .iter()
        .scan(0i64, |acc, &s| {
            *acc += i64::from(s);
            Some(*acc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_starts_with_zero() {
        assert_eq!(difference(&[5, 3, 10]), vec![0, -2, 7]);
        assert_eq!(difference(&[-9]), vec![0]);
        assert!(difference(&[]).is_empty());
    }

    #[test]
    fn difference_does_not_wrap_at_i16_bounds() {
        assert_eq!(
            difference(&[i16::MIN, i16::MAX, i16::MIN]),
            vec![0, 65535, -65535]
        );
    }

    #[test]
    fn integrate_matches_prefix_sums() {
        let samples = [4i16, -1, 0, 12, -30];
        let ints = integrate(&samples);
        assert_eq!(ints.len(), samples.len());
        for (i, total) in ints.iter().enumerate() {
            let expected: i64 = samples[..=i].iter().map(|&s| i64::from(s)).sum();
            assert_eq!(*total, expected);
        }
    }

    #[test]
    fn integrate_does_not_overflow_on_long_runs() {
        let samples = vec![i16::MAX; 100_000];
        let last = *integrate(&samples).last().unwrap();
        assert_eq!(last, i64::from(i16::MAX) * 100_000);
    }

    #[test]
    fn all_series_share_the_input_length() {
        for n in 0..5 {
            let samples: Vec<i16> = (0..n).map(|i| i as i16 * 3 - 2).collect();
            assert_eq!(difference(&samples).len(), n);
            assert_eq!(integrate(&samples).len(), n);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let samples = [1i16, 1, 2, 3, 5, 8];
        assert_eq!(difference(&samples), difference(&samples));
        assert_eq!(integrate(&samples), integrate(&samples));
    }
}
