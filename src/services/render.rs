use crate::domain::models::ImageRecord;
use std::path::Path;

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Photo card for one record: a link to the large image around a lazy
/// thumbnail, followed by the counters.
pub fn create_markup(record: &ImageRecord) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"photo-card\">\n");
    html.push_str(&format!(
        "  <a class=\"photo-link\" href=\"{}\">\n",
        html_escape(&record.large_image_url)
    ));
    html.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\" loading=\"lazy\"/>\n",
        html_escape(&record.webformat_url),
        html_escape(&record.tags)
    ));
    html.push_str("  </a>\n  <div class=\"info\">\n");
    for (label, value) in [
        ("Likes", record.likes),
        ("Views", record.views),
        ("Comments", record.comments),
        ("Downloads", record.downloads),
    ] {
        html.push_str(&format!(
            "    <p class=\"info-item\"><b>{}: </b> {}</p>\n",
            label, value
        ));
    }
    html.push_str("  </div>\n</div>\n");
    html
}

/// Accumulated photo cards, in the order they were appended.
#[derive(Debug, Default)]
pub struct Gallery {
    fragments: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    pub fn append_records<'a>(&mut self, records: impl IntoIterator<Item = &'a ImageRecord>) {
        for r in records {
            self.append(create_markup(r));
        }
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn to_document(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", html_escape(title)));
        html.push_str(
            "  <style>\n    body { font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 24px; }\n    .gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }\n    .photo-card { border-radius: 6px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2); overflow: hidden; }\n    .photo-card img { display: block; width: 100%; height: 200px; object-fit: cover; }\n    .info { display: flex; justify-content: space-around; font-size: 12px; padding: 4px; }\n    .info-item { display: flex; flex-direction: column; align-items: center; margin: 4px 0; }\n  </style>\n</head>\n<body>\n",
        );
        html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
        html.push_str("<div class=\"gallery\">\n");
        for f in &self.fragments {
            html.push_str(f);
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    pub fn write_document(&self, path: &Path, title: &str) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_document(title))?;
        Ok(())
    }
}
