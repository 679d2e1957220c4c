use crate::validation::Language;

/// Values shown on the index page
#[derive(Debug, Default, Clone)]
pub struct PageView<'a> {
    pub original_text: &'a str,
    pub translation: &'a str,
    pub evaluation: &'a str,
    pub language: Option<Language>,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let selected = view.language.unwrap_or(Language::English);
    let options: String = Language::ALL
        .iter()
        .map(|lang| {
            let attr = if *lang == selected { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                lang.as_str(),
                attr
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>LLM-переводчик</title>
</head>
<body>
<h1>Перевод и оценка качества</h1>
<form method="post" action="/">
<label for="original_text">Исходный текст</label>
<textarea id="original_text" name="original_text" rows="8" cols="80">{original}</textarea>
<label for="language">Язык перевода</label>
<select id="language" name="language">{options}</select>
<button type="submit">Перевести</button>
</form>
<section>
<h2>Перевод</h2>
<pre id="translation">{translation}</pre>
</section>
<section>
<h2>Оценка</h2>
<pre id="evaluation">{evaluation}</pre>
</section>
</body>
</html>
"#,
        original = escape_html(view.original_text),
        options = options,
        translation = escape_html(view.translation),
        evaluation = escape_html(view.evaluation),
    )
}

fn escape_html(text: &str) -> String {
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
