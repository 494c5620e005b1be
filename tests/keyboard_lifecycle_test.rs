use ring_carousel::{Carousel, CarouselError, CarouselOptions, Direction, Key, KeyboardHub};

fn ring(n: usize) -> Carousel<usize> {
    Carousel::new((0..n).collect(), CarouselOptions::default()).unwrap()
}

#[test]
fn test_arrow_right_advances_once_per_event() {
    let hub = KeyboardHub::new();
    let mut carousel = ring(6);
    carousel.mount(&hub).unwrap();

    hub.dispatch(&Key::ArrowRight);
    assert_eq!(carousel.active_index(), 1);
    hub.dispatch(&Key::ArrowRight);
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.direction(), Direction::Forward);

    hub.dispatch(&Key::ArrowLeft);
    assert_eq!(carousel.active_index(), 1);
    assert_eq!(carousel.direction(), Direction::Backward);
}

#[test]
fn test_unmount_detaches_listener() {
    let hub = KeyboardHub::new();
    let mut carousel = ring(6);
    carousel.mount(&hub).unwrap();
    hub.dispatch(&Key::ArrowRight);

    carousel.unmount();
    let before = carousel.state();
    hub.dispatch(&Key::ArrowRight);

    assert_eq!(carousel.state(), before);
    assert_eq!(hub.listener_count(), 0);
    assert!(carousel.phase().is_idle());
}

#[test]
fn test_unmount_is_idempotent_and_safe_unmounted() {
    let mut carousel = ring(2);
    carousel.unmount();
    carousel.unmount();
    assert!(!carousel.is_mounted());

    let hub = KeyboardHub::new();
    carousel.mount(&hub).unwrap();
    carousel.unmount();
    carousel.unmount();
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_double_mount_rejected() {
    let hub = KeyboardHub::new();
    let mut carousel = ring(3);
    carousel.mount(&hub).unwrap();

    let err = carousel.mount(&hub).unwrap_err();
    assert!(matches!(err, CarouselError::InvalidState { .. }));
    assert_eq!(hub.listener_count(), 1);

    carousel.unmount();
    assert!(carousel.mount(&hub).is_ok());
}

#[test]
fn test_two_carousels_share_a_hub() {
    let hub = KeyboardHub::new();
    let mut team = ring(4);
    let mut projects = ring(3);
    team.mount(&hub).unwrap();
    projects.mount(&hub).unwrap();

    hub.dispatch(&Key::ArrowLeft);
    assert_eq!(team.active_index(), 3);
    assert_eq!(projects.active_index(), 2);

    projects.unmount();
    hub.dispatch(&Key::ArrowLeft);
    assert_eq!(team.active_index(), 2);
    assert_eq!(projects.active_index(), 2);
}

#[test]
fn test_dropping_carousel_releases_listener() {
    let hub = KeyboardHub::new();
    {
        let mut carousel = ring(3);
        carousel.mount(&hub).unwrap();
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_other_keys_ignored() {
    let hub = KeyboardHub::new();
    let mut carousel = ring(3);
    carousel.mount(&hub).unwrap();

    hub.dispatch(&Key::Other("Enter".to_string()));
    assert_eq!(carousel.active_index(), 0);
    assert_eq!(carousel.direction(), Direction::None);
    assert!(carousel.handle_key(&Key::Other("Tab".to_string())).is_none());
}
