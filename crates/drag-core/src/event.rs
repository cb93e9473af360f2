//! Drag and hover lifecycle notifications and the sinks that receive them.

use crate::error::UnknownEventKind;
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEvent<Id> {
    DragStart(Id),
    Drag(Id),
    DragEnd(Id),
    HoverOn(Id),
    HoverOff(Id),
}

impl<Id: Copy> DragEvent<Id> {
    pub fn kind(&self) -> DragEventKind {
        match self {
            DragEvent::DragStart(_) => DragEventKind::DragStart,
            DragEvent::Drag(_) => DragEventKind::Drag,
            DragEvent::DragEnd(_) => DragEventKind::DragEnd,
            DragEvent::HoverOn(_) => DragEventKind::HoverOn,
            DragEvent::HoverOff(_) => DragEventKind::HoverOff,
        }
    }

    pub fn object(&self) -> Id {
        match *self {
            DragEvent::DragStart(id)
            | DragEvent::Drag(id)
            | DragEvent::DragEnd(id)
            | DragEvent::HoverOn(id)
            | DragEvent::HoverOff(id) => id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    DragStart,
    Drag,
    DragEnd,
    HoverOn,
    HoverOff,
}

impl DragEventKind {
    pub const ALL: [DragEventKind; 5] = [
        DragEventKind::DragStart,
        DragEventKind::Drag,
        DragEventKind::DragEnd,
        DragEventKind::HoverOn,
        DragEventKind::HoverOff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DragEventKind::DragStart => "dragstart",
            DragEventKind::Drag => "drag",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::HoverOn => "hoveron",
            DragEventKind::HoverOff => "hoveroff",
        }
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragEventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DragEventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Receives events synchronously, in the order the interactor raises them.
pub trait DragEventSink<Id> {
    fn emit(&mut self, event: DragEvent<Id>);
}

/// Queue sink: the host drains it after each pointer event.
impl<Id> DragEventSink<Id> for Vec<DragEvent<Id>> {
    fn emit(&mut self, event: DragEvent<Id>) {
        self.push(event);
    }
}

impl<Id: fmt::Debug> DragEventSink<Id> for mpsc::Sender<DragEvent<Id>> {
    fn emit(&mut self, event: DragEvent<Id>) {
        if let Err(e) = self.send(event) {
            log::warn!("[events] receiver dropped, lost {:?}", e.0);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<Id> = Box<dyn FnMut(&DragEvent<Id>)>;

/// Per-instance observer list keyed by event kind.
pub struct Listeners<Id> {
    next_id: u64,
    by_kind: FnvHashMap<DragEventKind, Vec<(ListenerId, Callback<Id>)>>,
}

impl<Id> Default for Listeners<Id> {
    fn default() -> Self {
        Self {
            next_id: 0,
            by_kind: FnvHashMap::default(),
        }
    }
}

impl<Id> Listeners<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        kind: DragEventKind,
        callback: impl FnMut(&DragEvent<Id>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.by_kind
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Returns whether a listener was removed.
    pub fn off(&mut self, listener: ListenerId) -> bool {
        let mut removed = false;
        for list in self.by_kind.values_mut() {
            let before = list.len();
            list.retain(|(id, _)| *id != listener);
            removed |= list.len() != before;
        }
        removed
    }

    pub fn len(&self, kind: DragEventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.values().all(Vec::is_empty)
    }
}

impl<Id: Copy> DragEventSink<Id> for Listeners<Id> {
    fn emit(&mut self, event: DragEvent<Id>) {
        if let Some(list) = self.by_kind.get_mut(&event.kind()) {
            for (_, callback) in list.iter_mut() {
                callback(&event);
            }
        }
    }
}
