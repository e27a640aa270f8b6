//! Markdown to terminal text rendering for release notes

use console::Style;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// How rendered text is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Undecorated text, safe for any terminal or pipe
    Plain,
    /// ANSI styled text
    Styled,
}

impl RenderStyle {
    /// Windows consoles get plain text, everything else is styled
    pub fn for_host() -> Self {
        if cfg!(windows) {
            RenderStyle::Plain
        } else {
            RenderStyle::Styled
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Marks {
    strong: usize,
    emphasis: usize,
    heading: Option<HeadingLevel>,
    link: bool,
}

struct Renderer {
    style: RenderStyle,
    out: String,
    marks: Marks,
    /// `None` for bullet lists, `Some(next)` for ordered lists
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    link_urls: Vec<String>,
}

impl Renderer {
    fn new(style: RenderStyle) -> Self {
        Self {
            style,
            out: String::new(),
            marks: Marks::default(),
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            link_urls: Vec::new(),
        }
    }

    fn styled(&self, text: &str, style: Style) -> String {
        match self.style {
            RenderStyle::Plain => text.to_string(),
            RenderStyle::Styled => style.force_styling(true).apply_to(text).to_string(),
        }
    }

    fn text_style(&self) -> Style {
        let mut style = Style::new();
        if self.marks.strong > 0 || self.marks.heading.is_some() {
            style = style.bold();
        }
        if self.marks.emphasis > 0 {
            style = style.italic();
        }
        if self.marks.heading == Some(HeadingLevel::H1) || self.marks.link {
            style = style.underlined();
        }
        style
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn line_prefix(&self) -> String {
        let mut prefix = "> ".repeat(self.quote_depth);
        if self.lists.len() > 1 {
            prefix.push_str(&"  ".repeat(self.lists.len() - 1));
        }
        prefix
    }

    fn push(&mut self, text: &str) {
        if self.at_line_start() {
            let prefix = self.line_prefix();
            self.out.push_str(&prefix);
        }
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    fn blank_line(&mut self) {
        if self.out.is_empty() || self.out.ends_with("\n\n") {
            return;
        }
        if !self.out.ends_with('\n') {
            self.newline();
        }
        self.newline();
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.blank_line();
                self.marks.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                self.marks.heading = None;
                self.blank_line();
            }
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else {
                    self.newline();
                }
            }
            Event::Start(Tag::Strong) => self.marks.strong += 1,
            Event::End(TagEnd::Strong) => self.marks.strong -= 1,
            Event::Start(Tag::Emphasis) => self.marks.emphasis += 1,
            Event::End(TagEnd::Emphasis) => self.marks.emphasis -= 1,
            Event::Start(Tag::BlockQuote(_)) => {
                self.blank_line();
                self.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                self.quote_depth -= 1;
                self.blank_line();
            }
            Event::Start(Tag::List(start)) => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else if !self.at_line_start() {
                    self.newline();
                }
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{}. ", next);
                        *next += 1;
                        marker
                    }
                    _ => match self.style {
                        RenderStyle::Plain => "- ".to_string(),
                        RenderStyle::Styled => "• ".to_string(),
                    },
                };
                self.push(&marker);
            }
            Event::End(TagEnd::Item) => {
                if !self.at_line_start() {
                    self.newline();
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.blank_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.blank_line();
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.marks.link = true;
                self.link_urls.push(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                self.marks.link = false;
                if let Some(url) = self.link_urls.pop() {
                    let url = self.styled(&format!(" ({})", url), Style::new().dim());
                    self.push(&url);
                }
            }
            Event::Text(text) if self.in_code_block => {
                let dim = Style::new().dim();
                for line in text.lines() {
                    let line = self.styled(line, dim.clone());
                    self.push("    ");
                    self.out.push_str(&line);
                    self.newline();
                }
            }
            Event::Text(text) => {
                let text = self.styled(&text, self.text_style());
                self.push(&text);
            }
            Event::Code(code) => {
                let code = match self.style {
                    RenderStyle::Plain => format!("`{}`", code),
                    RenderStyle::Styled => self.styled(&code, Style::new().cyan()),
                };
                self.push(&code);
            }
            Event::SoftBreak => self.push(" "),
            Event::HardBreak => self.newline(),
            Event::Rule => {
                self.blank_line();
                self.push("---");
                self.blank_line();
            }
            Event::TaskListMarker(done) => self.push(if done { "[x] " } else { "[ ] " }),
            Event::Html(html) | Event::InlineHtml(html) => self.push(&html),
            _ => {}
        }
    }
}

/// Render markdown to display-ready text
pub fn render(markdown: &str, style: RenderStyle) -> String {
    let mut renderer = Renderer::new(style);
    for event in Parser::new(markdown) {
        renderer.event(event);
    }
    let mut out = renderer.out.trim_end().to_string();
    out.push('\n');
    out
}
