//! Page generation.
//!
//! A page is the template with its content placeholder replaced by the
//! rendered markdown and its title placeholder replaced by the document's
//! first level-1 heading.

use log::{debug, info};
use pagesmith_config::TemplateConfig;
use pagesmith_core::Result;
use pagesmith_render::{document_to_node, extract_title};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of markdown source files.
const MARKDOWN_EXT: &str = "md";

/// Extension of generated pages.
const HTML_EXT: &str = "html";

/// Render one markdown document into a full page.
///
/// Root-relative `href="/` and `src="/` are rewritten to `base_path`.
///
/// # Example
///
/// ```
/// use pagesmith_config::TemplateConfig;
/// use pagesmith_site::render_page;
///
/// let page = render_page(
///     "# Hi\n\n[home](/)",
///     "<title>{{ Title }}</title>{{ Content }}",
///     &TemplateConfig::default(),
///     "/blog/",
/// )
/// .unwrap();
/// assert_eq!(
///     page,
///     r#"<title>Hi</title><div><h1>Hi</h1><p><a href="/blog/">home</a></p></div>"#
/// );
/// ```
pub fn render_page(
    markdown: &str,
    template: &str,
    placeholders: &TemplateConfig,
    base_path: &str,
) -> Result<String> {
    let content = document_to_node(markdown)?.render()?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(&placeholders.content_placeholder, &content)
        .replace(&placeholders.title_placeholder, &title);

    Ok(apply_base_path(&page, base_path))
}

fn apply_base_path(page: &str, base_path: &str) -> String {
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{}/", base_path)
    };
    if base == "/" {
        return page.to_string();
    }
    let page = rewrite_root_urls(page, "href", &base);
    rewrite_root_urls(&page, "src", &base)
}

/// Prefix every `attr="/...` with `base`. Protocol-relative `attr="//...`
/// is left untouched.
fn rewrite_root_urls(page: &str, attr: &str, base: &str) -> String {
    let needle = format!("{}=\"/", attr);
    let mut out = String::with_capacity(page.len());
    let mut rest = page;
    while let Some(pos) = rest.find(&needle) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + needle.len()..];
        if after.starts_with('/') {
            out.push_str(&needle);
        } else {
            out.push_str(&format!("{}=\"{}", attr, base));
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Generate a single page from `from` into `dest`.
///
/// Missing parent directories of `dest` are created.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    placeholders: &TemplateConfig,
    base_path: &str,
) -> Result<()> {
    info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from)?;
    let template = fs::read_to_string(template_path)?;
    let page = render_page(&markdown, &template, placeholders, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Generate a page for every markdown file under `content_dir`.
///
/// The directory structure is mirrored into `dest_dir` with `.md` swapped
/// for `.html`. Other files are ignored. Entries are visited in name order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    placeholders: &TemplateConfig,
    base_path: &str,
) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(content_dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut written = Vec::new();
    for entry in entries {
        let from = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            written.extend(generate_pages_recursive(
                &from,
                template_path,
                &dest,
                placeholders,
                base_path,
            )?);
        } else if from.extension().is_some_and(|ext| ext == MARKDOWN_EXT) {
            let dest = dest.with_extension(HTML_EXT);
            generate_page(&from, template_path, &dest, placeholders, base_path)?;
            written.push(dest);
        } else {
            debug!("Skipping non-markdown file {}", from.display());
        }
    }

    Ok(written)
}
