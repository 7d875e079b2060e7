//! Collapsible form sections.

use std::collections::BTreeSet;

/// Grouped regions of the listing form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Basic,
    Pricing,
    Attributes,
    Images,
    Variants,
    Export,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Basic,
        SectionId::Pricing,
        SectionId::Attributes,
        SectionId::Images,
        SectionId::Variants,
        SectionId::Export,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Basic => "📝 Basic Information",
            SectionId::Pricing => "💰 Pricing & Inventory",
            SectionId::Attributes => "💎 Product Attributes",
            SectionId::Images => "🖼️ Images",
            SectionId::Variants => "📏 Size Variants",
            SectionId::Export => "🚀 Export",
        }
    }
}

/// Collapsed flags, one per section. Everything starts expanded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionVisibility {
    collapsed: BTreeSet<SectionId>,
}

impl SectionVisibility {
    pub fn is_collapsed(&self, id: SectionId) -> bool {
        self.collapsed.contains(&id)
    }

    /// Flip one section; siblings are left alone.
    pub fn toggle(&mut self, id: SectionId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    /// Collapse every section except `active`, which is left as it was.
    pub fn collapse_others(&mut self, active: SectionId) {
        for id in SectionId::ALL {
            if id != active {
                self.collapsed.insert(id);
            }
        }
    }
}
