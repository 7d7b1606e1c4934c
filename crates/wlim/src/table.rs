use wlim_core::{Point, Rect, Target};

pub struct TableFormatter {
    label_width: usize,
    click_width: usize,
    anchor_width: usize,
    bounds_width: usize,
}

fn point_cell(point: Point) -> String {
    format!("{},{}", point.x, point.y)
}

fn bounds_cell(rect: Rect) -> String {
    format!("{},{} {}x{}", rect.x, rect.y, rect.width, rect.height)
}

impl TableFormatter {
    pub fn new(targets: &[Target]) -> Self {
        let label_width = targets
            .iter()
            .map(|t| t.label().len())
            .max()
            .unwrap_or(1)
            .max("Label".len());

        Self {
            label_width,
            click_width: 11,
            anchor_width: 11,
            bounds_width: 21,
        }
    }

    pub fn print_table(&self, targets: &[Target]) {
        self.print_header();
        for target in targets {
            self.print_row(target);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, target: &Target) {
        println!(
            "│ {:<width_label$} │ {:<width_click$} │ {:<width_anchor$} │ {:<width_bounds$} │",
            target.label(),
            truncate(&point_cell(target.click_point()), self.click_width),
            truncate(&point_cell(target.anchor_point()), self.anchor_width),
            truncate(&bounds_cell(target.bounds()), self.bounds_width),
            width_label = self.label_width,
            width_click = self.click_width,
            width_anchor = self.anchor_width,
            width_bounds = self.bounds_width,
        );
    }

    fn rule(&self, left: &str, mid: &str, right: &str) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.label_width + 2),
            "─".repeat(self.click_width + 2),
            "─".repeat(self.anchor_width + 2),
            "─".repeat(self.bounds_width + 2),
        )
    }

    fn top_border(&self) -> String {
        self.rule("┌", "┬", "┐")
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_label$} │ {:<width_click$} │ {:<width_anchor$} │ {:<width_bounds$} │",
            "Label",
            "Click",
            "Anchor",
            "Bounds",
            width_label = self.label_width,
            width_click = self.click_width,
            width_anchor = self.anchor_width,
            width_bounds = self.bounds_width,
        )
    }

    fn separator(&self) -> String {
        self.rule("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.rule("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
