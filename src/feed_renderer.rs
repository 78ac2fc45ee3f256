/*!
 * Rendering of parsed changelog sections into an update-feed `<description>`.
 *
 * The markup is a fixed template: a CDATA block holding a style rule, a
 * Chinese list with its PS line, a horizontal rule, then the English list
 * with its PS line. Entry and postscript text is inserted as-is, without
 * any escaping, so callers must keep `]]>` and stray markup out of the input.
 */

use crate::changelog_parser::ChangelogSections;

/// Product name used in both section headers by default
pub const DEFAULT_PRODUCT_NAME: &str = "Adobe Downloader";

/// Style rule emitted at the top of the CDATA block
pub const LIST_STYLE: &str = "ul{margin-top: 0;margin-bottom: 7;padding-left: 18;}";

/// Separator placed between postscript notes
pub const POSTSCRIPT_SEPARATOR: &str = "<br>";

/// Wrap each entry in `<li>` and join them one per line
pub fn render_list_items(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("<li>{}</li>", entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join postscript notes with line-break tags, without a trailing break
pub fn render_postscripts(postscripts: &[String]) -> String {
    postscripts.join(POSTSCRIPT_SEPARATOR)
}

/// Renders the feed description for a named product
#[derive(Debug, Clone)]
pub struct FeedRenderer {
    product_name: String,
}

impl Default for FeedRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_NAME)
    }
}

impl FeedRenderer {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Substitute the four line collections into the description template
    pub fn render(
        &self,
        changelog_cn: &[String],
        changelog_en: &[String],
        ps_cn: &[String],
        ps_en: &[String],
    ) -> String {
        format!(
            "
    <description>
        <![CDATA[
            <style>{style}</style>
            <h4>{product} 更新日志: </h4>
            <ul>
                {changelog_cn}
            </ul>
            <h4>PS: {ps_cn}</h4>
            <hr>
            <h4>{product} Changes: </h4>
            <ul>
                {changelog_en}
            </ul>
            <h4>PS: {ps_en}</h4>
        ]]>
    </description>
    ",
            style = LIST_STYLE,
            product = self.product_name,
            changelog_cn = render_list_items(changelog_cn),
            changelog_en = render_list_items(changelog_en),
            ps_cn = render_postscripts(ps_cn),
            ps_en = render_postscripts(ps_en),
        )
    }

    pub fn render_sections(&self, sections: &ChangelogSections) -> String {
        self.render(
            &sections.changelog_cn,
            &sections.changelog_en,
            &sections.ps_cn,
            &sections.ps_en,
        )
    }
}

/// Render the description with the default product name
pub fn generate_xml(
    changelog_cn: &[String],
    changelog_en: &[String],
    ps_cn: &[String],
    ps_en: &[String],
) -> String {
    FeedRenderer::default().render(changelog_cn, changelog_en, ps_cn, ps_en)
}
