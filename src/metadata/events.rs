/// A lifecycle event a mapped class can register callbacks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    PrePersist,
    PostPersist,
    PreUpdate,
    PostUpdate,
    PreRemove,
    PostRemove,
    PostLoad,
    PreFlush,
}

impl LifecycleEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrePersist => "prePersist",
            Self::PostPersist => "postPersist",
            Self::PreUpdate => "preUpdate",
            Self::PostUpdate => "postUpdate",
            Self::PreRemove => "preRemove",
            Self::PostRemove => "postRemove",
            Self::PostLoad => "postLoad",
            Self::PreFlush => "preFlush",
        }
    }
}
