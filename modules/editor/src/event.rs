/// Construction events raised by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionEvent {
    PartCreated,
    PartDeleted,
    PartAttached,
    PartDetached,
    PartPicked,
    PartDropped,
    PartOffset,
    PartRotated,
    PartTweaked,
    PartRootSelected,
}

/// The events the propagation engine reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartEvent {
    Attached,
    Detached,
    Other,
}

impl From<ConstructionEvent> for PartEvent {
    fn from(event: ConstructionEvent) -> Self {
        match event {
            ConstructionEvent::PartAttached => PartEvent::Attached,
            ConstructionEvent::PartDetached => PartEvent::Detached,
            _ => PartEvent::Other,
        }
    }
}
