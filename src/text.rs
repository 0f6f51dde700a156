use crate::font::Font;
use crate::units::Pt;

/// Tabs expand to this many spaces before wrapping
const TAB_SIZE: usize = 4;

const ELLIPSIS: &str = "...";

/// Total horizontal advance of a piece of text; [Font::width_of] with the
/// argument order the layout code reads best in
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.width_of(text, size)
}

/// Break text into lines no wider than `max_width`, respecting hard line
/// breaks and greedily packing words. A word wider than the whole line is
/// split mid-word rather than overflowing. Input that is empty or entirely
/// whitespace produces no lines at all; blank lines between paragraphs
/// survive as empty entries.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TAB_SIZE));

    let space = font.char_advance(' ', size);
    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        let mut width = Pt(0.0);
        for word in paragraph.split_whitespace() {
            let word_width = width_of_text(word, font, size);
            if word_width > max_width {
                if width.0 > 0.0 {
                    lines.push(std::mem::take(&mut line));
                    width = Pt(0.0);
                }
                for ch in word.chars() {
                    let advance = font.char_advance(ch, size);
                    if width.0 > 0.0 && (width + advance) > max_width {
                        lines.push(std::mem::take(&mut line));
                        width = Pt(0.0);
                    }
                    line.push(ch);
                    width += advance;
                }
                continue;
            }

            if width.0 > 0.0 && (width + space + word_width) > max_width {
                lines.push(std::mem::take(&mut line));
                width = Pt(0.0);
            }
            if !line.is_empty() {
                line.push(' ');
                width += space;
            }
            line.push_str(word);
            width += word_width;
        }
        lines.push(line);
    }

    lines
}

/// Shorten text to fit `max_width`, replacing the removed tail with an
/// ellipsis. Text that already fits comes back unchanged, so re-truncating
/// an already truncated value is a no-op. If not even the ellipsis fits the
/// result is the bare ellipsis.
pub fn truncate_to_width(text: &str, font: &Font, size: Pt, max_width: Pt) -> String {
    if text.is_empty() {
        return String::new();
    }
    if width_of_text(text, font, size) <= max_width {
        return text.to_string();
    }

    let mut kept = text.to_string();
    while !kept.is_empty() {
        kept.pop();
        let candidate = format!("{kept}{ELLIPSIS}");
        if width_of_text(&candidate, font, size) <= max_width {
            log::trace!("truncated {text:?} to {candidate:?}");
            return candidate;
        }
    }

    log::trace!("truncated {text:?} to a bare ellipsis");
    ELLIPSIS.to_string()
}
