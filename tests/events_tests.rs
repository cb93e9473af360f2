// Host-side tests for event kinds and the bundled sinks.

use drag_core::*;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

#[test]
fn event_kind_names_round_trip() {
    for kind in DragEventKind::ALL {
        assert_eq!(kind.as_str().parse::<DragEventKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn unknown_event_kind_is_rejected() {
    let err = "dragover".parse::<DragEventKind>().unwrap_err();
    assert_eq!(err, UnknownEventKind("dragover".to_string()));
    assert_eq!(err.to_string(), "unknown drag event kind `dragover`");
}

#[test]
fn event_exposes_kind_and_object() {
    let event = DragEvent::HoverOff(7u32);
    assert_eq!(event.kind(), DragEventKind::HoverOff);
    assert_eq!(event.object(), 7);
}

#[test]
fn listeners_only_receive_their_kind() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut listeners = Listeners::new();
    let log = seen.clone();
    listeners.on(DragEventKind::DragStart, move |e: &DragEvent<u32>| {
        log.borrow_mut().push(*e)
    });

    listeners.emit(DragEvent::HoverOn(1));
    listeners.emit(DragEvent::DragStart(1));
    listeners.emit(DragEvent::Drag(1));

    assert_eq!(*seen.borrow(), vec![DragEvent::DragStart(1)]);
    assert_eq!(listeners.len(DragEventKind::DragStart), 1);
    assert_eq!(listeners.len(DragEventKind::Drag), 0);
}

#[test]
fn listeners_off_removes_only_that_listener() {
    let count = Rc::new(RefCell::new((0, 0)));
    let mut listeners = Listeners::<u32>::new();
    let a = count.clone();
    let first = listeners.on(DragEventKind::Drag, move |_| a.borrow_mut().0 += 1);
    let b = count.clone();
    listeners.on(DragEventKind::Drag, move |_| b.borrow_mut().1 += 1);

    listeners.emit(DragEvent::Drag(3));
    assert!(listeners.off(first));
    assert!(!listeners.off(first));
    listeners.emit(DragEvent::Drag(3));

    assert_eq!(*count.borrow(), (1, 2));
    assert!(!listeners.is_empty());
}

#[test]
fn interactor_drives_listener_sink() {
    let ends = Rc::new(RefCell::new(Vec::new()));
    let mut listeners = Listeners::new();
    let sink_log = ends.clone();
    listeners.on(DragEventKind::DragEnd, move |e: &DragEvent<u32>| {
        sink_log.borrow_mut().push(e.object())
    });

    let camera = Camera::default();
    let viewport = Viewport::from_size(600.0, 600.0);
    let mut it = DragInteractor::new(SphereCaster::default(), listeners);
    it.set_viewport(viewport);
    let objects = vec![SceneObject::new(9, Vec3::ZERO, 0.5)];

    let centre = viewport.to_device(camera.project(Vec3::ZERO));
    it.pointer_down(centre, &camera, &objects).unwrap();
    it.pointer_up();

    assert_eq!(*ends.borrow(), vec![9]);
}

#[test]
fn channel_sink_delivers_in_order() {
    let (tx, rx) = mpsc::channel();
    let camera = Camera::default();
    let viewport = Viewport::from_size(600.0, 600.0);
    let mut it = DragInteractor::new(SphereCaster::default(), tx);
    it.set_viewport(viewport);
    let mut objects = vec![SceneObject::new(4, Vec3::ZERO, 0.5)];
    let centre = viewport.to_device(camera.project(Vec3::ZERO));

    it.pointer_move(centre, &camera, &mut objects).unwrap();
    it.pointer_down(centre, &camera, &objects).unwrap();
    it.pointer_move(centre + Vec2::new(30.0, 0.0), &camera, &mut objects)
        .unwrap();
    it.pointer_up();

    let received: Vec<DragEvent<u32>> = rx.try_iter().collect();
    assert_eq!(
        received,
        vec![
            DragEvent::HoverOn(4),
            DragEvent::DragStart(4),
            DragEvent::Drag(4),
            DragEvent::DragEnd(4),
        ]
    );
}

#[test]
fn channel_sink_survives_dropped_receiver() {
    let (tx, rx) = mpsc::channel::<DragEvent<u32>>();
    drop(rx);
    let mut sink = tx;
    sink.emit(DragEvent::Drag(1));
}
