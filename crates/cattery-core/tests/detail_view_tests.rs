//! Detail view integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use cattery_core::models::{Animal, AnimalStatus, StatusTone};
use cattery_core::view::{DetailViewController, InquiryKind, MediaFrame, Screen};
use cattery_core::{
    new_detail_view, new_detail_view_with_overrides, CatteryError, DetailViewHandle, FfiAnimal,
    FfiCloseListener, FfiScreen,
};

fn make_animal(id: u32, name: &str, status: &str) -> Animal {
    let image = format!("/{}.jpg", name.to_lowercase());
    let mut animal = Animal::new(id, name, AnimalStatus::from(status), image);
    animal.breed = "Scottish Fold".to_string();
    animal.age = "12 weeks".to_string();
    animal.price = "$2,500".to_string();
    animal.description = format!("{} is ready for a new home.", name);
    animal
}

fn ffi_animal(id: u32, name: &str, status: &str) -> FfiAnimal {
    make_animal(id, name, status).into()
}

#[test]
fn test_kiara_scenario() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(3, "Kiara", "available"));

    let profile = controller.profile().unwrap();
    assert_eq!(
        profile.personality_traits,
        ["Elegant", "Independent", "Intelligent", "Graceful", "Observant"]
    );
    assert_eq!(profile.purchase_price, "$3,200");

    controller.next_media();
    assert_eq!(controller.session().unwrap().selected_media_index(), 1);

    assert!(controller.inquire());
    assert_eq!(controller.session().unwrap().current_screen(), Screen::Inquiry);

    assert!(controller.back());
    let session = controller.session().unwrap();
    assert_eq!(session.current_screen(), Screen::Details);
    assert_eq!(session.selected_media_index(), 1);
}

#[test]
fn test_sold_animal_cannot_inquire() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(2, "Elvis", "sold"));

    assert!(!controller.inquire());
    assert_eq!(controller.session().unwrap().current_screen(), Screen::Details);

    let view = controller.view().unwrap();
    assert!(!view.inquire_action.enabled);
    assert_eq!(view.inquire_action.label, "Sold");
    assert!(view.inquiry.is_none());
}

#[test]
fn test_inquiry_gating_by_status() {
    let cases = vec![
        ("available", Screen::Inquiry),
        ("reserved", Screen::Details),
        ("sold", Screen::Details),
        ("adopted", Screen::Details),
    ];

    for (status, expected) in cases {
        let mut controller = DetailViewController::new();
        controller.open(make_animal(5, "Hanna", status));
        controller.inquire();
        assert_eq!(
            controller.session().unwrap().current_screen(),
            expected,
            "status {} should land on {:?}",
            status,
            expected
        );
    }
}

#[test]
fn test_reopen_resets_for_other_animal() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(3, "Kiara", "available"));
    controller.select_media(2).unwrap();
    controller.inquire();
    let first_session = controller.session().unwrap().session_id.clone();

    // Last open wins
    controller.open(make_animal(1, "Simba", "available"));
    let session = controller.session().unwrap();
    assert_eq!(session.current_screen(), Screen::Details);
    assert_eq!(session.selected_media_index(), 0);
    assert_ne!(session.session_id, first_session);
    assert_eq!(controller.animal().unwrap().name, "Simba");
}

#[test]
fn test_unknown_status_display() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(8, "Oreo", "waitlist"));

    let view = controller.view().unwrap();
    assert_eq!(view.status_label, "waitlist");
    assert_eq!(view.status_tone, StatusTone::Muted);
    assert_eq!(view.title, "Meet Oreo");
}

#[test]
fn test_status_badges() {
    let cases = vec![
        ("available", "Available Now", StatusTone::Success),
        ("reserved", "Reserved", StatusTone::Warning),
        ("sold", "Sold", StatusTone::Muted),
    ];

    for (status, label, tone) in cases {
        let mut controller = DetailViewController::new();
        controller.open(make_animal(4, "Eva", status));
        let view = controller.view().unwrap();
        assert_eq!(view.status_label, label, "label for {}", status);
        assert_eq!(view.status_tone, tone, "tone for {}", status);
    }
}

#[test]
fn test_simba_video_playback() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(1, "Simba", "available"));

    let view = controller.view().unwrap();
    assert_eq!(view.frame, MediaFrame::Fixed);
    assert!(!view.is_video_playing);
    assert_eq!(view.thumbnails.len(), 5);
    assert!(view.thumbnails[2].is_video);
    assert_eq!(view.thumbnails[2].src, "/simba3.jpg");

    controller.select_media(2).unwrap();
    let view = controller.view().unwrap();
    assert!(view.is_video_playing);
    assert!(matches!(view.frame, MediaFrame::Natural { muted: true, .. }));
    assert_eq!(view.counter_label, "3 / 5");
    assert!(view.thumbnails[2].is_selected);

    // Host paused the video
    assert!(controller.set_video_playing(false));
    assert!(!controller.view().unwrap().is_video_playing);

    controller.next_media();
    assert!(!controller.view().unwrap().is_video_playing);
    assert!(!controller.set_video_playing(true));
}

#[test]
fn test_inquiry_sheet_on_inquiry_screen() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(1, "Simba", "available"));
    controller.inquire();

    let view = controller.view().unwrap();
    let sheet = view.inquiry.expect("inquiry sheet");
    assert_eq!(sheet.title, "Inquire About Simba");
    assert_eq!(sheet.option(InquiryKind::Purchase).unwrap().price, "$2,800");
    assert_eq!(sheet.option(InquiryKind::Rental).unwrap().price, "$180/week");
    assert_eq!(sheet.deposit_amount, "$500");
}

#[test]
fn test_favorite_is_session_local() {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(2, "Elvis", "available"));
    assert_eq!(controller.toggle_favorite(), Some(true));
    assert!(controller.view().unwrap().is_favorited);

    controller.close();
    controller.open(make_animal(2, "Elvis", "available"));
    assert!(!controller.view().unwrap().is_favorited);
}

#[test]
fn test_view_carries_open_time() -> anyhow::Result<()> {
    let before = chrono::Utc::now();
    let mut controller = DetailViewController::new();
    controller.open(make_animal(2, "Elvis", "available"));

    let view = controller.view().unwrap();
    let opened_at = chrono::DateTime::parse_from_rfc3339(&view.opened_at)?;
    assert!(opened_at.with_timezone(&chrono::Utc) >= before - chrono::Duration::seconds(1));
    assert_eq!(view.opened_at, controller.session().unwrap().opened_at);
    Ok(())
}

#[test]
fn test_view_json_shape() -> anyhow::Result<()> {
    let mut controller = DetailViewController::new();
    controller.open(make_animal(3, "Kiara", "reserved"));

    let json = serde_json::to_value(controller.view().unwrap())?;
    assert_eq!(json["animal"]["status"], "reserved");
    assert_eq!(json["screen"], "details");
    assert_eq!(json["status_tone"], "warning");
    assert_eq!(json["frame"]["frame"], "fixed");
    assert_eq!(json["inquire_action"]["label"], "Reserved");
    assert!(json["inquiry"].is_null());
    Ok(())
}

// =========================================================================
// FFI handle
// =========================================================================

struct CountingListener {
    closed: Arc<AtomicU32>,
}

impl FfiCloseListener for CountingListener {
    fn on_close(&self, _animal_id: u32) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_ffi_handle_flow() {
    let handle = new_detail_view();
    let closed = Arc::new(AtomicU32::new(0));
    handle
        .set_close_listener(Box::new(CountingListener {
            closed: Arc::clone(&closed),
        }))
        .unwrap();

    assert!(handle.view().unwrap().is_none());
    assert!(matches!(handle.toggle_favorite(), Err(CatteryError::NotOpen)));

    handle.open(ffi_animal(3, "Kiara", "available")).unwrap();
    assert!(handle.inquire().unwrap());

    let view = handle.view().unwrap().unwrap();
    assert_eq!(view.screen, FfiScreen::Inquiry);
    assert_eq!(view.status_tone, "success");
    assert!(chrono::DateTime::parse_from_rfc3339(&view.opened_at).is_ok());
    assert_eq!(view.inquiry.unwrap().options.len(), 2);

    assert!(matches!(handle.select_media(9), Err(CatteryError::InvalidInput(_))));

    handle.close().unwrap();
    handle.close().unwrap();
    assert_eq!(closed.load(Ordering::SeqCst), 1);
    assert!(!handle.is_open().unwrap());
}

/// Listener that reads the handle back from inside the callback.
struct ReentrantListener {
    handle: Arc<DetailViewHandle>,
    seen: Arc<Mutex<Vec<(u32, bool, bool)>>>,
}

impl FfiCloseListener for ReentrantListener {
    fn on_close(&self, animal_id: u32) {
        let still_open = self.handle.is_open().unwrap();
        let has_view = self.handle.view().unwrap().is_some();
        self.seen.lock().unwrap().push((animal_id, still_open, has_view));
    }
}

#[test]
fn test_close_listener_can_call_back_into_handle() {
    let handle = new_detail_view();
    let seen = Arc::new(Mutex::new(Vec::new()));
    handle
        .set_close_listener(Box::new(ReentrantListener {
            handle: Arc::clone(&handle),
            seen: Arc::clone(&seen),
        }))
        .unwrap();

    let (done_tx, done_rx) = mpsc::channel();
    let worker = Arc::clone(&handle);
    thread::spawn(move || {
        worker.open(ffi_animal(3, "Kiara", "available")).unwrap();
        worker.close().unwrap();
        // Reopening after a close works the same way
        worker.open(ffi_animal(4, "Eva", "reserved")).unwrap();
        worker.close().unwrap();
        done_tx.send(()).unwrap();
    });

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("close should not block on the listener");
    assert_eq!(*seen.lock().unwrap(), vec![(3, false, false), (4, false, false)]);
}

#[test]
fn test_ffi_open_json() {
    let handle = new_detail_view();
    handle
        .open_json(
            r#"{"id":1,"name":"Simba","breed":"Scottish Fold","age":"14 weeks","gender":"Male",
                "color":"Golden","price":"$2,800","status":"reserved","image":"/simba.jpg",
                "description":"Regal.","features":["Litter trained"]}"#
                .to_string(),
        )
        .unwrap();

    let view = handle.view().unwrap().unwrap();
    assert_eq!(view.media_count, 5);
    assert!(!view.inquire_enabled);
    assert_eq!(view.inquire_label, "Reserved");
    assert!(handle.view_json().unwrap().unwrap().contains("\"session_id\""));

    assert!(matches!(
        handle.open_json("not json".to_string()),
        Err(CatteryError::SerializationError(_))
    ));
}

#[test]
fn test_ffi_overrides_layered_over_builtins() {
    let handle = new_detail_view_with_overrides(
        r#"[{ "id": 6, "patch": { "purchase_price": "$3,000" } }]"#.to_string(),
    )
    .unwrap();

    let added = handle.resolve_profile(6, "Luna".into(), "/luna.jpg".into()).unwrap();
    assert_eq!(added.purchase_price, "$3,000");

    let builtin = handle.resolve_profile(3, "Kiara".into(), "/kiara.jpg".into()).unwrap();
    assert_eq!(builtin.purchase_price, "$3,200");

    assert!(matches!(
        new_detail_view_with_overrides("[{\"id\":1,\"patch\":{\"media\":[]}}]".to_string()),
        Err(CatteryError::ConfigurationError(_))
    ));
}
