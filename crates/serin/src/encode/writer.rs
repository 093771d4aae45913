pub(crate) struct LineWriter {
    out: String,
    indent_cache: String,
    width: usize,
}

impl LineWriter {
    pub fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
            width,
        }
    }

    /// Append one line at the given depth. Lines are separated, not
    /// terminated, so the finished document carries no trailing newline.
    pub fn line(&mut self, depth: usize, text: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.write_indent(depth * self.width);
        self.out.push_str(text);
    }

    fn write_indent(&mut self, spaces: usize) {
        if spaces == 0 {
            return;
        }
        if self.indent_cache.len() < spaces {
            let missing = spaces - self.indent_cache.len();
            self.indent_cache.extend(core::iter::repeat_n(' ', missing));
        }
        self.out.push_str(&self.indent_cache[..spaces]);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
