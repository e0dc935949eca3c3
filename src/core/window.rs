use crate::domain::model::ContextWindow;

/// 比對行前後各取兩行
pub const CONTEXT_RADIUS: usize = 2;

/// Builds the up-to-five-line neighbourhood of `index`, clipped to the bounds of `lines`.
pub fn build_context_window(lines: &[String], index: usize) -> ContextWindow {
    let end = lines.len().min(index.saturating_add(CONTEXT_RADIUS + 1));
    let start = index.saturating_sub(CONTEXT_RADIUS).min(end);

    let text = lines[start..end].join("\n").to_lowercase();

    ContextWindow { start, end, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Line {}", i)).collect()
    }

    #[test]
    fn test_window_in_the_middle() {
        let window = build_context_window(&lines(10), 5);
        assert_eq!((window.start, window.end), (3, 8));
        assert_eq!(window.text, "line 3\nline 4\nline 5\nline 6\nline 7");
    }

    #[test]
    fn test_window_clipped_at_edges() {
        let source = lines(4);

        let head = build_context_window(&source, 0);
        assert_eq!((head.start, head.end), (0, 3));

        let tail = build_context_window(&source, 3);
        assert_eq!((tail.start, tail.end), (1, 4));
    }

    #[test]
    fn test_window_size_bounds_for_every_index() {
        for n in 0..8 {
            let source = lines(n);
            for i in 0..n {
                let window = build_context_window(&source, i);
                let expected = (n.min(i + 3)) - i.saturating_sub(2);
                assert!(window.line_count() >= expected);
                assert!(window.line_count() <= 5);
                assert!(window.end <= n);
            }
        }
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let window = build_context_window(&lines(2), 9);
        assert_eq!(window.line_count(), 0);
        assert!(window.text.is_empty());
    }
}
