use std::sync::{Arc, OnceLock};
use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

static FONT_DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Families tried for overlay text, in order.
const SANS_FAMILIES: [Family<'static>; 3] = [
    Family::SansSerif,
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
];

/// System fonts plus any font files under `$FIELDMOVIE_FONT_DIR`, loaded once.
pub fn font_database() -> Arc<Database> {
    FONT_DB
        .get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            if let Some(dir) = std::env::var_os("FIELDMOVIE_FONT_DIR") {
                db.load_fonts_dir(dir);
            }
            tracing::debug!(faces = db.len(), "font database loaded");
            Arc::new(db)
        })
        .clone()
}

/// Overlay text is always sans-serif: pick a sans face of the requested weight, else any face.
pub fn font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let query = Query {
                families: &SANS_FAMILIES,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style: Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}
