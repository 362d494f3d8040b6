use serde::Serialize;

/// The playlist as reported by the player: a tree rooted at one node.
pub type Playlist = PlaylistItem;

/// Whether the player lets clients modify an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// One entry of the playlist tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlaylistItem {
    Node(PlaylistNode),
    Leaf(PlaylistLeaf),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistNode {
    pub id: String,
    pub name: String,
    pub access: Access,
    pub children: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistLeaf {
    pub id: String,
    pub name: String,
    pub access: Access,
    pub uri: String,
    /// Seconds; negative when the player does not know.
    pub duration: i64,
    pub current: bool,
}

impl PlaylistItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Node(n) => &n.id,
            Self::Leaf(l) => &l.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Node(n) => &n.name,
            Self::Leaf(l) => &l.name,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Node(n) => n.access,
            Self::Leaf(l) => l.access,
        }
    }

    /// All leaves in depth-first order.
    pub fn leaves(&self) -> Vec<&PlaylistLeaf> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// The leaf flagged as currently playing, if any.
    pub fn current(&self) -> Option<&PlaylistLeaf> {
        self.leaves().into_iter().find(|leaf| leaf.current)
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&PlaylistItem> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Node(n) => n.children.iter().find_map(|child| child.find(id)),
            Self::Leaf(_) => None,
        }
    }
}

fn collect_leaves<'a>(item: &'a PlaylistItem, out: &mut Vec<&'a PlaylistLeaf>) {
    match item {
        PlaylistItem::Leaf(leaf) => out.push(leaf),
        PlaylistItem::Node(node) => {
            for child in &node.children {
                collect_leaves(child, out);
            }
        }
    }
}
