use crate::encoding::GroundTask;

/// A relevant ground task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    ground: GroundTask,
    primitive: bool,
}

impl Task {
    pub fn new(ground: GroundTask, primitive: bool) -> Self {
        Self { ground, primitive }
    }

    pub fn ground(&self) -> &GroundTask {
        &self.ground
    }

    pub fn symbol(&self) -> usize {
        self.ground.symbol()
    }

    pub fn arguments(&self) -> &[usize] {
        self.ground.arguments()
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn is_compound(&self) -> bool {
        !self.primitive
    }
}
