use ab_glyph::FontVec;
use anyhow::anyhow;
use fontique::{Attributes, Collection, GenericFamily, QueryFamily, QueryStatus, SourceCache};

/// A simple font manager that uses Fontique to find fonts installed on the system.
pub struct FontManager {
    collection: Collection,
    cache: SourceCache,
}

impl FontManager {
    pub fn new() -> Self {
        Self {
            collection: Collection::new(Default::default()),
            cache: SourceCache::new_shared(),
        }
    }

    /// Resolve the first usable font from the preferred family names; falls back to SansSerif.
    /// Returns the parsed font together with the family name it came from.
    pub fn resolve_system_font(&mut self, prefer: &[String]) -> anyhow::Result<(FontVec, String)> {
        let mut col_clone = self.collection.clone();

        let mut q = self.collection.query(&mut self.cache);

        let mut families: Vec<QueryFamily> = prefer
            .iter()
            .map(|name| QueryFamily::Named(name.as_str()))
            .collect();
        families.push(GenericFamily::SansSerif.into());

        q.set_families(families);
        q.set_attributes(Attributes::default());

        let mut chosen: Option<(FontVec, String)> = None;
        q.matches_with(|cand| {
            // Some system fonts (bitmap-only, odd collections) do not parse; keep looking
            let Ok(font) = FontVec::try_from_vec_and_index(cand.blob.data().to_vec(), cand.index) else {
                return QueryStatus::Continue;
            };

            let (fam_id, _) = cand.family;
            let name = col_clone
                .family(fam_id)
                .map(|info| info.name().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            chosen = Some((font, name));
            QueryStatus::Stop
        });

        chosen.ok_or_else(|| anyhow!("Failed to resolve a system font"))
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}
