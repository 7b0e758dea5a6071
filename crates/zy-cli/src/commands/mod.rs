pub mod cast;
pub mod daily;
pub mod list;
pub mod show;
pub mod trigrams;

/// Render a six-line figure, top line first, marking changing positions
/// with the traditional circle (yang) and cross (yin).
pub fn figure(lines: [bool; 6], changing: &[u32]) -> String {
    (0..6)
        .rev()
        .map(|i| {
            let position = i as u32 + 1;
            let bar = if lines[i] { "━━━━━━━" } else { "━━━ ━━━" };
            if changing.contains(&position) {
                format!("{bar} {}", if lines[i] { "○" } else { "×" })
            } else {
                bar.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_prints_top_line_first() {
        let rendered = figure([true, true, true, false, false, false], &[]);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "━━━ ━━━"); // position 6
        assert_eq!(rows[5], "━━━━━━━"); // position 1
    }

    #[test]
    fn figure_marks_changing_lines() {
        let rendered = figure([true, false, true, false, true, false], &[1, 2]);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[5], "━━━━━━━ ○");
        assert_eq!(rows[4], "━━━ ━━━ ×");
        assert_eq!(rows[3], "━━━━━━━");
    }
}
