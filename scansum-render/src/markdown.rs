//! Markdown-to-terminal rendering for server-supplied narrative text.
//!
//! The API returns Markdown in `summary`, `key_insights`, and
//! `risk_assessment`. Events are mapped to styled spans from a fixed
//! palette; raw HTML events are dropped. Server text therefore cannot
//! inject anything beyond plain styled characters.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme;

/// Render a Markdown string into terminal lines.
pub fn markdown_lines(src: &str) -> Vec<Line<'static>> {
    let mut r = Renderer::default();
    for event in Parser::new_ext(src, Options::empty()) {
        r.handle(event);
    }
    r.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    heading: bool,
    code_block: bool,
    item_depth: usize,
    // One counter per nesting level; None for bullet lists.
    list_stack: Vec<Option<u64>>,
}

impl Renderer {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if self.item_depth == 0 {
                    self.blank_separator();
                }
            }
            Event::End(TagEnd::Paragraph) => self.flush(),

            Event::Start(Tag::Heading { .. }) => {
                self.blank_separator();
                self.heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush();
                self.heading = false;
            }

            Event::Start(Tag::List(start)) => {
                if self.list_stack.is_empty() {
                    self.blank_separator();
                }
                self.list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_stack.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                self.item_depth += 1;
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let current = *n;
                        *n += 1;
                        format!("{indent}{current}. ")
                    }
                    _ => format!("{indent}\u{2022} "),
                };
                self.spans.push(Span::raw(marker));
            }
            Event::End(TagEnd::Item) => {
                self.flush();
                self.item_depth = self.item_depth.saturating_sub(1);
            }

            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(TagEnd::Emphasis) => self.italic = self.italic.saturating_sub(1),

            Event::Start(Tag::CodeBlock(_)) => {
                self.blank_separator();
                self.code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush();
                self.code_block = false;
            }

            Event::Text(text) => {
                if self.code_block {
                    for (i, line) in text.split('\n').enumerate() {
                        if i > 0 {
                            self.flush();
                        }
                        if !line.is_empty() {
                            self.spans
                                .push(Span::styled(format!("  {line}"), theme::MD_CODE));
                        }
                    }
                } else {
                    let style = self.current_style();
                    self.spans.push(Span::styled(text.into_string(), style));
                }
            }
            Event::Code(code) => {
                self.spans
                    .push(Span::styled(code.into_string(), theme::MD_CODE));
            }

            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::from(Span::styled(
                    "\u{2500}".repeat(32),
                    theme::TEXT_DIM,
                )));
            }

            // Trust boundary: raw HTML from the server is never emitted.
            Event::Html(_) | Event::InlineHtml(_) => {}

            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }

    fn current_style(&self) -> Style {
        if self.heading {
            return theme::MD_HEADING;
        }
        let mut style = Style::default();
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    fn blank_separator(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|l| !l.spans.is_empty()) {
            self.lines.push(Line::from(""));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn plain_paragraph() {
        let text = plain(&markdown_lines("Two hosts expose SSH."));
        assert_eq!(text, vec!["Two hosts expose SSH."]);
    }

    #[test]
    fn heading_then_paragraph_separated() {
        let text = plain(&markdown_lines("# Overview\n\nAll quiet."));
        assert_eq!(text, vec!["Overview", "", "All quiet."]);
    }

    #[test]
    fn strong_text_gets_bold_span() {
        let lines = markdown_lines("a **risk** here");
        let bold_span = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "risk")
            .expect("bold span present");
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn bullet_list_renders_markers() {
        let text = plain(&markdown_lines("- first\n- second"));
        assert_eq!(text, vec!["\u{2022} first", "\u{2022} second"]);
    }

    #[test]
    fn ordered_list_counts_up() {
        let text = plain(&markdown_lines("1. one\n2. two\n3. three"));
        assert_eq!(text, vec!["1. one", "2. two", "3. three"]);
    }

    #[test]
    fn soft_break_becomes_space() {
        let text = plain(&markdown_lines("line one\nline two"));
        assert_eq!(text, vec!["line one line two"]);
    }

    #[test]
    fn inline_html_dropped() {
        let text = plain(&markdown_lines("safe <script>alert(1)</script> text"));
        let joined = text.join(" ");
        assert!(joined.contains("safe"));
        assert!(!joined.contains("<script>"));
    }

    #[test]
    fn code_block_indented() {
        let text = plain(&markdown_lines("```\nnmap -sV host\n```"));
        assert_eq!(text, vec!["  nmap -sV host"]);
    }
}
