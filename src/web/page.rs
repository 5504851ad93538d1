// Server-rendered HTML for the prediction page.
//
// The page is one form: a text area and a "Prediksi" button. Below it sits
// at most one notice. Every piece of user text goes through escape_html.

use crate::classifier::label::Label;
use crate::inference::Verdict;

pub const PAGE_TITLE: &str = "Nexus Squad";
pub const HEADING: &str = "Tes Model 1";
pub const SIDEBAR_NOTICE: &str = "Created by Nexus Squad";
pub const TEXT_AREA_LABEL: &str = "Masukkan teks berita di bawah ini :";
pub const SUBMIT_LABEL: &str = "Prediksi";

const INTRO: &str = "Setelah dilakukan modeling, langkah selanjutnya adalah menggunakan model \
yang telah ditentukan untuk melakukan prediksi. Pada tes model pertama ini, kami menggunakan \
model Logistic Regression. Silahkan masukkan berita yang ingin Anda prediksi pada kolom teks di \
bawah ini. Kemudian tekan tombol \"Prediksi\" untuk melihat hasil prediksi.";

/// House emoji favicon as an inline SVG.
const ICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
<text y='.9em' font-size='90'>🏠</text></svg>";

/// Visual style of a notice box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
    Success,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
            NoticeKind::Success => "success",
        }
    }
}

/// A single message box rendered under the form. `html` is trusted markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub html: String,
}

impl Notice {
    pub fn warning(text: &str) -> Self {
        Self {
            kind: NoticeKind::Warning,
            html: escape_html(text),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            html: escape_html(text),
        }
    }
}

/// Map a verdict to its notice: FAKE is failure-styled, REAL success-styled.
pub fn verdict_notice(verdict: &Verdict) -> Notice {
    match verdict {
        Verdict::Empty => Notice::warning(&verdict.message()),
        Verdict::Classified { label, .. } => {
            let kind = match label {
                Label::Fake => NoticeKind::Error,
                Label::Real => NoticeKind::Success,
            };
            Notice {
                kind,
                html: format!("The news is <strong>{}</strong>.", label.as_str()),
            }
        }
        Verdict::Unrecognized { .. } => Notice::error(&verdict.message()),
    }
}

/// Render the full page with the given text pre-filled.
pub fn render(text: &str, notice: Option<&Notice>) -> String {
    let notice_html = notice
        .map(|n| {
            format!(
                "<div class=\"notice {}\" role=\"status\">{}</div>",
                n.kind.css_class(),
                n.html
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="{icon}">
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<div class="layout wide">
<aside class="sidebar">
<div class="notice warning">{sidebar}</div>
</aside>
<main class="main">
<h3>{heading}</h3>
<p>{intro}</p>
<form method="post" action="/">
<label for="news_text">{label}</label>
<textarea id="news_text" name="news_text">{text}</textarea>
<button type="submit">{submit}</button>
</form>
{notice}
</main>
</div>
</body>
</html>
"#,
        title = PAGE_TITLE,
        icon = ICON,
        sidebar = SIDEBAR_NOTICE,
        heading = HEADING,
        intro = escape_html(INTRO),
        label = TEXT_AREA_LABEL,
        text = escape_html(text),
        submit = SUBMIT_LABEL,
        notice = notice_html,
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_escapes_submitted_text() {
        let html = render("<b>breaking</b>", None);
        assert!(html.contains("&lt;b&gt;breaking&lt;/b&gt;"));
        assert!(!html.contains("<b>breaking"));
    }

    #[test]
    fn test_render_has_page_chrome() {
        let html = render("", None);
        assert!(html.contains("<title>Nexus Squad</title>"));
        assert!(html.contains(HEADING));
        assert!(html.contains(SIDEBAR_NOTICE));
        assert!(html.contains(">Prediksi</button>"));
        assert!(!html.contains("role=\"status\""));
    }

    #[test]
    fn test_fake_notice_is_error_styled() {
        let notice = verdict_notice(&Verdict::Classified {
            label: Label::Fake,
            score: 0.8,
        });
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.html, "The news is <strong>FAKE</strong>.");
    }

    #[test]
    fn test_real_notice_is_success_styled() {
        let notice = verdict_notice(&Verdict::Classified {
            label: Label::Real,
            score: 0.8,
        });
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.html.contains("REAL"));
    }

    #[test]
    fn test_empty_notice_is_warning() {
        let notice = verdict_notice(&Verdict::Empty);
        assert_eq!(notice.kind, NoticeKind::Warning);
    }

    #[test]
    fn test_unrecognized_notice_is_error() {
        let notice = verdict_notice(&Verdict::Unrecognized { class: 3 });
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.html.contains("unrecognized"));
    }
}
