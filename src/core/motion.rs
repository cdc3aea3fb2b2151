//! Animation timings and the stylesheet generated from them.
//!
//! Durations and delays are in seconds, offsets in CSS pixels.

use std::fmt::Write;

/// Section fade-in once revealed.
pub const SECTION_FADE: f64 = 0.8;

/// Per-character entrance for animated text.
pub const CHAR_DURATION: f64 = 0.5;
pub const CHAR_STAGGER: f64 = 0.05;
pub const CHAR_RISE: f64 = 20.0;

/// Section headings drop in from above.
pub const HEADING_DURATION: f64 = 0.8;
pub const HEADING_DROP: f64 = 20.0;

/// Grid cards rise in one after another.
pub const CARD_DURATION: f64 = 0.5;
pub const CARD_STAGGER: f64 = 0.1;
pub const CARD_RISE: f64 = 20.0;

/// Hero columns.
pub const HERO_DURATION: f64 = 0.8;
pub const HERO_SLIDE: f64 = 50.0;
pub const HERO_ZOOM_FROM: f64 = 0.8;

/// Scroll hint chevron bounce.
pub const BOUNCE_PERIOD: f64 = 1.5;
pub const BOUNCE_HEIGHT: f64 = 10.0;

pub const HOVER_SCALE: f64 = 1.05;
pub const NAV_HOVER_SCALE: f64 = 1.1;
pub const TAP_SCALE: f64 = 0.95;

/// Overshooting cubic-bezier standing in for a stiff spring.
pub const SPRING_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
pub const SPRING_DURATION: f64 = 0.3;

/// One character of an animated string.
#[derive(Clone, Debug, PartialEq)]
pub struct CharFrame {
    pub index: usize,
    pub ch: char,
    pub delay: f64,
}

impl CharFrame {
    /// Text to put in the span. Spaces become non-breaking so inline-block
    /// spans don't collapse them.
    pub fn glyph(&self) -> String {
        if self.ch == ' ' {
            '\u{a0}'.to_string()
        } else {
            self.ch.to_string()
        }
    }

    pub fn style(&self) -> String {
        format!("animation-delay: {}s", format_secs(self.delay))
    }
}

/// Split `text` into characters with staggered start times.
pub fn stagger(text: &str) -> Vec<CharFrame> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| CharFrame {
            index,
            ch,
            delay: index as f64 * CHAR_STAGGER,
        })
        .collect()
}

/// Inline style delaying the `index`th grid card.
pub fn card_delay_style(index: usize) -> String {
    format!("animation-delay: {}s", format_secs(index as f64 * CARD_STAGGER))
}

fn format_secs(secs: f64) -> String {
    // Round to milliseconds to keep float noise out of the markup.
    let ms = (secs * 1000.0).round() / 1000.0;
    format!("{ms}")
}

/// CSS for every animation class used by the page.
pub fn stylesheet() -> String {
    let mut css = String::new();

    let _ = write!(
        css,
        ".reveal {{ opacity: 0; transition: opacity {SECTION_FADE}s ease-out; }}\n\
         .reveal.reveal-visible {{ opacity: 1; }}\n"
    );

    let _ = write!(
        css,
        "@keyframes char-rise {{ from {{ opacity: 0; transform: translateY({CHAR_RISE}px); }} to {{ opacity: 1; transform: translateY(0); }} }}\n\
         .char-rise {{ display: inline-block; opacity: 0; animation: char-rise {CHAR_DURATION}s ease-out forwards; }}\n"
    );

    let _ = write!(
        css,
        "@keyframes heading-drop {{ from {{ opacity: 0; transform: translateY(-{HEADING_DROP}px); }} to {{ opacity: 1; transform: translateY(0); }} }}\n\
         .heading-drop {{ opacity: 0; animation: heading-drop {HEADING_DURATION}s ease-out forwards; }}\n"
    );

    let _ = write!(
        css,
        "@keyframes card-rise {{ from {{ opacity: 0; transform: translateY({CARD_RISE}px); }} to {{ opacity: 1; transform: translateY(0); }} }}\n\
         .card-rise {{ opacity: 0; animation: card-rise {CARD_DURATION}s ease-out forwards; }}\n"
    );

    let _ = write!(
        css,
        "@keyframes hero-slide {{ from {{ opacity: 0; transform: translateX(-{HERO_SLIDE}px); }} to {{ opacity: 1; transform: translateX(0); }} }}\n\
         .hero-slide {{ opacity: 0; animation: hero-slide {HERO_DURATION}s ease-out forwards; }}\n\
         @keyframes hero-zoom {{ from {{ opacity: 0; transform: scale({HERO_ZOOM_FROM}); }} to {{ opacity: 1; transform: scale(1); }} }}\n\
         .hero-zoom {{ opacity: 0; animation: hero-zoom {HERO_DURATION}s ease-out forwards; }}\n"
    );

    let _ = write!(
        css,
        "@keyframes hint-bounce {{ 0%, 100% {{ transform: translate(-50%, 0); }} 50% {{ transform: translate(-50%, {BOUNCE_HEIGHT}px); }} }}\n\
         .hint-bounce {{ animation: hint-bounce {BOUNCE_PERIOD}s ease-in-out infinite; }}\n"
    );

    let _ = write!(
        css,
        ".hover-spring {{ transition: transform {SPRING_DURATION}s {SPRING_EASING}; }}\n\
         .hover-spring:hover {{ transform: scale({HOVER_SCALE}); }}\n\
         .press-spring {{ transition: transform {SPRING_DURATION}s {SPRING_EASING}; }}\n\
         .press-spring:hover {{ transform: scale({HOVER_SCALE}); }}\n\
         .press-spring:active {{ transform: scale({TAP_SCALE}); }}\n\
         .nav-spring {{ transition: transform {SPRING_DURATION}s {SPRING_EASING}, color 0.2s; }}\n\
         .nav-spring:hover {{ transform: scale({NAV_HOVER_SCALE}); }}\n\
         .nav-spring:active {{ transform: scale({TAP_SCALE}); }}\n"
    );

    let _ = write!(
        css,
        "@media (prefers-reduced-motion: reduce) {{ .char-rise, .heading-drop, .card-rise, .hero-slide, .hero-zoom, .hint-bounce {{ animation: none; opacity: 1; }} }}\n"
    );

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_one_frame_per_char() {
        let frames = stagger("theseven++");
        assert_eq!(frames.len(), 10);
        let text: String = frames.iter().map(|f| f.ch).collect();
        assert_eq!(text, "theseven++");
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index, i);
        }
    }

    #[test]
    fn test_stagger_delays_strictly_increase_by_step() {
        let frames = stagger("FUOJ online judge");
        assert_eq!(frames[0].delay, 0.0);
        for pair in frames.windows(2) {
            let step = pair[1].delay - pair[0].delay;
            assert!((step - CHAR_STAGGER).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stagger_counts_chars_not_bytes() {
        let frames = stagger("Vũ");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].ch, 'ũ');
    }

    #[test]
    fn test_stagger_empty() {
        assert!(stagger("").is_empty());
    }

    #[test]
    fn test_space_renders_non_breaking() {
        let frames = stagger("a b");
        assert_eq!(frames[1].glyph(), "\u{a0}");
        assert_eq!(frames[0].glyph(), "a");
    }

    #[test]
    fn test_delay_styles_are_rounded() {
        assert_eq!(stagger("abcd")[3].style(), "animation-delay: 0.15s");
        assert_eq!(card_delay_style(0), "animation-delay: 0s");
        assert_eq!(card_delay_style(7), "animation-delay: 0.7s");
    }

    #[test]
    fn test_stylesheet_uses_timings() {
        let css = stylesheet();
        assert!(css.contains("transition: opacity 0.8s"));
        assert!(css.contains("animation: char-rise 0.5s"));
        assert!(css.contains("translateY(20px)"));
        assert!(css.contains("scale(1.05)"));
        assert!(css.contains(SPRING_EASING));
        assert!(css.contains("hint-bounce 1.5s ease-in-out infinite"));
    }
}
