/// HTML rendering for the viewer surface
///
/// Raw string markup, no template engine: one full page for the listing and
/// one fragment the page swaps in per object via htmx.
use crate::services::storage::ObjectSummary;

/// Render the listing page: one card per object with a button that fetches
/// the signed URL fragment into the object's target element
pub fn listing_page(objects: &[ObjectSummary]) -> String {
    let mut cards = String::new();
    for object in objects {
        cards.push_str(&object_card(object));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>S3 File List</title>
    <meta name="description" content="CloudFront signed URL viewer">
    <script src="https://unpkg.com/htmx.org@1.9.12"></script>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
    <div class="container mx-auto p-4">
        <h1 class="text-2xl font-bold mb-4">S3 File List</h1>
        <div class="grid gap-4 grid-cols-1 sm:grid-cols-2 md:grid-cols-3">
{cards}        </div>
    </div>
</body>
</html>"#
    )
}

fn object_card(object: &ObjectSummary) -> String {
    let target_id = format!("file-{}", css_escape(&object.key));
    let modified = object
        .last_modified
        .map(|dt| format!(", modified {}", dt.format("%Y-%m-%d %H:%M UTC")))
        .unwrap_or_default();

    format!(
        r##"            <div class="bg-white shadow-md rounded p-4 flex flex-col justify-between">
                <div>
                    <h2 class="text-lg font-semibold">{key}</h2>
                    <p class="text-sm text-gray-500">{size} bytes{modified}</p>
                </div>
                <div class="mt-2">
                    <button type="button"
                        class="px-3 py-2 bg-blue-500 text-white rounded hover:bg-blue-700"
                        hx-get="/api/signed-url?key={encoded_key}"
                        hx-target="#{target_id}">Get Signed URL</button>
                </div>
                <div id="{target_id}" class="mt-2"></div>
            </div>
"##,
        key = html_escape(&object.key),
        size = object.size_bytes,
        encoded_key = urlencoding::encode(&object.key),
    )
}

/// Render the fragment returned by the signed URL endpoint
pub fn signed_url_fragment(signed_url: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" class="text-blue-600 underline hover:text-blue-800">Open Signed URL</a>"#,
        html_escape(signed_url)
    )
}

/// Make a value safe for use in a CSS id selector by replacing the
/// characters a selector would need to escape with `-`
pub fn css_escape(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ' ' | '!' | '"' | '#' | '$' | '%' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '.'
            | '/' | ':' | ';' | '<' | '=' | '>' | '?' | '@' | '[' | '\\' | ']' | '^' | '`'
            | '{' | '|' | '}' | '~' => '-',
            other => other,
        })
        .collect()
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
