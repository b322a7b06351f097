use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(6),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Greedily packs key hints into lines no wider than `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width || !has_hint {
            current = candidate;
            has_hint = true;
        } else {
            out.push(current);
            current = format!("{prefix}{hint}");
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 10;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_hints_single_line_when_wide() {
        let lines = pack_hint_lines(&["[a] one", "[b] two"], 80);
        assert_eq!(lines, vec![" [a] one  [b] two".to_string()]);
    }

    #[test]
    fn test_pack_hints_wraps_when_narrow() {
        let lines = pack_hint_lines(&["[a] one", "[b] two", "[c] three"], 18);
        assert_eq!(
            lines,
            vec![
                " [a] one  [b] two".to_string(),
                " [c] three".to_string()
            ]
        );
    }

    #[test]
    fn test_pack_hints_oversized_hint_gets_own_line() {
        let lines = pack_hint_lines(&["a very long hint text", "b"], 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], " b");
    }

    #[test]
    fn test_pack_hints_empty_inputs() {
        assert!(pack_hint_lines(&[], 80).is_empty());
        assert!(pack_hint_lines(&["x"], 0).is_empty());
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 30, 8);
        let r = centered_rect(50, 50, area);
        assert_eq!(r, Rect::new(0, 0, 30, 8));

        let area = Rect::new(0, 0, 200, 60);
        let r = centered_rect(50, 50, area);
        assert_eq!(r, Rect::new(50, 15, 100, 30));
    }

    #[test]
    fn test_layout_footer_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.footer.height, 2);
        assert_eq!(layout.main.height, 20);
    }
}
