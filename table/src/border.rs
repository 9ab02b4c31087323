/// The three horizontal rules of a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    Top,
    Middle,
    Bottom,
}

impl Border {
    /// Character placed at both ends of the rule
    pub fn terminal(self) -> char {
        match self {
            Border::Top => '.',
            Border::Middle => '|',
            Border::Bottom => '\'',
        }
    }

    /// Draw the rule for the given column widths, e.g. `.----+----.`
    pub fn draw(self, widths: &[usize]) -> String {
        let segments: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        let end = self.terminal();
        format!("{end}{}{end}", segments.join("+"))
    }
}
