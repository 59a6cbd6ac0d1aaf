//! Indenting SCSS writer

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub(crate) struct ScssWriter {
    out: String,
    depth: usize,
}

impl ScssWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// `header {` and indent
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    /// `} header {` at the same depth, for `@else` chains
    pub fn chain(&mut self, header: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(format!("}} {} {{", header.as_ref()));
        self.depth += 1;
    }

    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}
