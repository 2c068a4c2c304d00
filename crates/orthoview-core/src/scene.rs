use crate::volume::StackHelper;

/// Drawable scene content.
#[derive(Clone, Debug)]
pub enum SceneNode {
    Stack(StackHelper),
}

/// Ordered list of everything the renderer draws.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    children: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) {
        self.children.push(node);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// First stack helper in the scene.
    pub fn stack_helper(&self) -> Option<&StackHelper> {
        self.children.iter().find_map(|node| match node {
            SceneNode::Stack(helper) => Some(helper),
        })
    }

    pub fn stack_helper_mut(&mut self) -> Option<&mut StackHelper> {
        self.children.iter_mut().find_map(|node| match node {
            SceneNode::Stack(helper) => Some(helper),
        })
    }
}
