use super::ObjectId;

/// Outcome of checking an actor against the owner of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owner,
    NotOwner,
    Missing,
}

impl Ownership {
    pub fn resolve(owner: Option<&ObjectId>, actor: &ObjectId) -> Self {
        match owner {
            None => Ownership::Missing,
            Some(owner) if owner == actor => Ownership::Owner,
            Some(_) => Ownership::NotOwner,
        }
    }
}
