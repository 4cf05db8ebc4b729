//! The rendered page tree consumed by the interaction layer.
//!
//! Pages are produced by the external site tooling as JSON and deserialized
//! as-is; docpager never generates or validates them. The static structure
//! (roles, ids, text, links) is read-only after load. Runtime presentation
//! state lives in `ClassList` and `InlineStyle` fields, which are the only
//! channel the interaction controllers communicate through.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// State class carried by an open nav panel and its trigger.
pub const CLASS_ACTIVE: &str = "active";
/// State class carried by a block that finished its entrance animation.
pub const CLASS_ANIMATE_IN: &str = "animate-in";

/// Role of a content block in the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Hero,
    Heading,
    Paragraph,
    FeatureCard,
    CategoryCard,
    Step,
    Code,
}

impl Role {
    /// Roles that are animated into view on first visibility
    pub fn is_revealable(self) -> bool {
        matches!(self, Role::FeatureCard | Role::CategoryCard | Role::Step)
    }
}

/// A hyperlink carried by a block or the navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    /// Whether the href targets a same-page fragment
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }

    /// The fragment identifier without its leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

/// Ordered set of state classes on a page element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class; a no-op if already present
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    /// Toggle a class and return whether it is present afterwards
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

/// Inline presentation state mutated by the interaction layer
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyle {
    /// 0.0 = fully hidden, 1.0 = fully shown
    pub opacity: f64,
    /// Downward offset in rows while a block is hidden or revealing
    pub offset_rows: u16,
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_rows: 0,
        }
    }
}

/// A content block of the rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Anchor id, when the block is a link target
    #[serde(default)]
    pub id: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub title: Option<String>,
    /// Plain text content; for code blocks, the exact text a copy captures
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(skip)]
    pub classes: ClassList,
    #[serde(skip)]
    pub style: InlineStyle,
}

/// The page's navigation bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navbar {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Whether the page carries a collapsed-menu trigger
    #[serde(default)]
    pub menu_trigger: bool,
    #[serde(skip)]
    pub trigger_classes: ClassList,
    #[serde(skip)]
    pub panel_classes: ClassList,
}

impl Navbar {
    /// The nav panel is open exactly when the panel carries the active class
    pub fn panel_open(&self) -> bool {
        self.panel_classes.contains(CLASS_ACTIVE)
    }
}

/// A rendered documentation page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub navbar: Option<Navbar>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    /// Deserialize a page document from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a page document from disk
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolve an anchor id to a block index
    pub fn block_index_by_id(&self, id: &str) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| b.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Page {
        Page::from_json(
            r##"{
                "title": "Infra Operator",
                "navbar": {
                    "brand": "infra-operator",
                    "links": [
                        {"label": "Features", "href": "#features"},
                        {"label": "GitHub", "href": "https://example.com/repo"}
                    ],
                    "menu_trigger": true
                },
                "blocks": [
                    {"role": "hero", "title": "Infra Operator", "text": "Kubernetes operator"},
                    {"id": "features", "role": "heading", "title": "Features"},
                    {"role": "feature-card", "title": "CRDs", "text": "Declarative resources"},
                    {"id": "install", "role": "code", "text": "helm install infra-operator\n"}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_from_json() {
        let page = sample_page();
        assert_eq!(page.title, "Infra Operator");
        assert_eq!(page.blocks.len(), 4);

        let navbar = page.navbar.as_ref().unwrap();
        assert!(navbar.menu_trigger);
        assert_eq!(navbar.links.len(), 2);
        assert!(navbar.links[0].is_fragment());
        assert_eq!(navbar.links[0].fragment(), Some("features"));
        assert!(!navbar.links[1].is_fragment());
    }

    #[test]
    fn test_block_index_by_id() {
        let page = sample_page();
        assert_eq!(page.block_index_by_id("features"), Some(1));
        assert_eq!(page.block_index_by_id("install"), Some(3));
        assert_eq!(page.block_index_by_id("missing"), None);
    }

    #[test]
    fn test_revealable_roles() {
        assert!(Role::FeatureCard.is_revealable());
        assert!(Role::CategoryCard.is_revealable());
        assert!(Role::Step.is_revealable());
        assert!(!Role::Hero.is_revealable());
        assert!(!Role::Code.is_revealable());
        assert!(!Role::Paragraph.is_revealable());
    }

    #[test]
    fn test_class_list_add_is_idempotent() {
        let mut classes = ClassList::default();
        classes.add(CLASS_ANIMATE_IN);
        classes.add(CLASS_ANIMATE_IN);
        assert!(classes.contains(CLASS_ANIMATE_IN));
        classes.remove(CLASS_ANIMATE_IN);
        assert!(!classes.contains(CLASS_ANIMATE_IN));
    }

    #[test]
    fn test_class_list_toggle() {
        let mut classes = ClassList::default();
        assert!(classes.toggle(CLASS_ACTIVE));
        assert!(classes.contains(CLASS_ACTIVE));
        assert!(!classes.toggle(CLASS_ACTIVE));
        assert!(!classes.contains(CLASS_ACTIVE));
        assert!(classes.toggle(CLASS_ACTIVE));
        assert!(classes.contains(CLASS_ACTIVE));
    }

    #[test]
    fn test_deserialized_blocks_start_with_default_style() {
        let page = sample_page();
        for block in &page.blocks {
            assert!((block.style.opacity - 1.0).abs() < f64::EPSILON);
            assert_eq!(block.style.offset_rows, 0);
            assert!(!block.classes.contains(CLASS_ANIMATE_IN));
        }
    }
}
