use std::cell::Cell;
use std::rc::Rc;

use overlay_scroll::layout::{scroll_for_thumb_offset, thumb_offset_for_scroll};
use overlay_scroll::prelude::*;

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Default config with the edge padding removed, so tracks span the viewport
fn bare_config() -> ScrollAreaConfig {
    let mut config = ScrollAreaConfig::default();
    config.horizontal.insets = Insets::ZERO;
    config.vertical.insets = Insets::ZERO;
    config
}

fn mount_bare(viewport: Size, content: Size) -> ScrollSync<HeadlessViewport, ScrollAreaConfig> {
    ScrollSync::mount(HeadlessViewport::new(viewport, content), bare_config())
}

#[test]
fn thumb_length_is_proportional_and_bounded() {
    for (viewport, content, min) in [
        (100.0, 400.0, 0.0),
        (100.0, 101.0, 0.0),
        (100.0, 100_000.0, 0.0),
        (100.0, 100_000.0, 20.0),
        (50.0, 60.0, 80.0),
    ] {
        let mut config = bare_config();
        config.vertical.min_thumb_length = min;
        let host = HeadlessViewport::new(Size::new(100.0, viewport), Size::new(100.0, content));
        let sync = ScrollSync::mount(host, config);

        let layout = sync.last_render().vertical;
        let expected = (layout.track.length * viewport / content).max(min);
        assert!(layout.thumb.visible);
        assert!(
            layout.thumb.length <= layout.track.length,
            "thumb {} exceeds track {}",
            layout.thumb.length,
            layout.track.length
        );
        assert!(approx(layout.thumb.length, expected.min(layout.track.length)));
    }
}

#[test]
fn non_overflowing_axis_hides_thumb() {
    for content in [0.0, 50.0, 100.0] {
        let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(100.0, content));
        sync.host_mut().set_scroll_offset(Axis::Vertical, 30.0);
        let info = sync.on_scroll();
        assert!(!info.vertical.thumb.visible, "content {content} should not scroll");
        assert!(!info.horizontal.thumb.visible);
    }
}

#[test]
fn shrinking_content_hides_visible_thumb() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(100.0, 400.0));
    assert!(sync.host().thumb(Axis::Vertical).visible);

    sync.host_mut().set_content_size(Size::new(100.0, 80.0));
    sync.on_content_resize();
    assert!(!sync.host().thumb(Axis::Vertical).visible);
    assert!(!sync.pointer_down(Axis::Vertical, Point::new(97.0, 5.0)));
}

#[test]
fn scroll_to_thumb_and_back_is_identity() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(100.0, 400.0));
    for scroll in [0.0, 1.0, 33.3, 150.0, 299.5, 300.0] {
        sync.host_mut().scroll_to(Axis::Vertical, scroll);
        let layout = sync.on_scroll().vertical;
        let travel = layout.track.length - layout.thumb.length;

        let offset = thumb_offset_for_scroll(travel, scroll, 300.0);
        assert!(approx(offset, layout.thumb.offset));
        assert!(approx(scroll_for_thumb_offset(travel, offset, 300.0), scroll));
    }
}

#[test]
fn drag_past_track_ends_is_clamped() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(100.0, 400.0));
    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 12.5)));

    sync.pointer_move(Point::new(97.0, 1_000.0));
    assert_eq!(sync.host().thumb(Axis::Vertical).offset, 75.0);
    assert_eq!(sync.host().scroll(Axis::Vertical), 300.0);

    sync.pointer_move(Point::new(97.0, -1_000.0));
    assert_eq!(sync.host().thumb(Axis::Vertical).offset, 0.0);
    assert_eq!(sync.host().scroll(Axis::Vertical), 0.0);

    sync.pointer_up();
}

#[test]
fn corner_conflict_switches_insets() {
    let host = HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(200.0, 200.0));
    let mut sync = ScrollSync::mount(host, ScrollAreaConfig::default());
    let config = ScrollAreaConfig::default();

    let info = *sync.last_render();
    assert!(info.conflicted);
    for axis in Axis::ALL {
        let track = info.axis(axis).track;
        assert!(track.conflicted);
        assert_eq!(track.insets, config.insets_for(axis, true));
        // 2px edge padding plus 6px of the other track in the corner
        assert_eq!(track.length, 90.0);
        assert!(info.axis(axis).thumb.visible);
    }

    sync.host_mut().set_content_size(Size::new(200.0, 90.0));
    let info = sync.on_content_resize();
    assert!(!info.conflicted);
    assert!(!info.vertical.thumb.visible);
    assert!(info.horizontal.thumb.visible);
    for axis in Axis::ALL {
        assert_eq!(info.axis(axis).track.insets, config.insets_for(axis, false));
    }
    assert_eq!(info.horizontal.track.length, 96.0);
}

#[test]
fn press_does_not_move_thumb() {
    // Track starts at y = 10 on screen, 40px thumb at offset 10
    let host = HeadlessViewport::new(Size::new(200.0, 200.0), Size::new(200.0, 1000.0))
        .with_origin(Point::new(0.0, 10.0));
    let mut sync = ScrollSync::mount(host, bare_config());
    sync.host_mut().scroll_to(Axis::Vertical, 50.0);
    let before = sync.on_scroll().vertical.thumb;
    assert!(approx(before.length, 40.0));
    assert!(approx(before.offset, 10.0));

    // 30% into the thumb
    let press = Point::new(197.0, 10.0 + before.offset + 0.3 * before.length);
    assert!(sync.pointer_down(Axis::Vertical, press));

    let session = *sync.drag(Axis::Vertical).session().unwrap();
    assert!(approx(session.grab_ratio, 0.3));

    let preview = sync.preview();
    assert!(approx(preview.vertical.thumb.offset, before.offset));
    assert!(approx(preview.drag_scroll.vertical.unwrap(), 50.0));
    assert!(preview.drag_scroll.horizontal.is_none());
}

#[test]
fn listeners_released_after_every_session() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(400.0, 400.0));

    for session in 0..5 {
        let axis = if session % 2 == 0 {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let press = match axis {
            Axis::Vertical => Point::new(97.0, 5.0),
            Axis::Horizontal => Point::new(5.0, 97.0),
        };
        assert!(sync.pointer_down(axis, press));
        assert_eq!(sync.host().active_listeners(), 2);

        for step in 1..=4 {
            let delta = step as f32 * 7.0;
            sync.pointer_move(Point::new(press.x + delta, press.y + delta));
        }
        assert!(sync.pointer_up());
        assert_eq!(sync.host().active_listeners(), 0);
    }

    // Both axes at once, ended by a lost capture
    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 5.0)));
    assert!(sync.pointer_down(Axis::Horizontal, Point::new(5.0, 97.0)));
    assert_eq!(sync.host().active_listeners(), 4);
    assert!(sync.capture_lost());

    assert_eq!(sync.host().active_listeners(), 0);
    assert_eq!(sync.host().active_captures(), 0);
    assert_eq!(sync.host().release_misses(), 0);
}

#[test]
fn reconcile_is_idempotent() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(250.0, 400.0));
    sync.host_mut().scroll_to(Axis::Vertical, 120.0);
    sync.host_mut().scroll_to(Axis::Horizontal, 40.0);

    let first = sync.reconcile();
    let host_first = (sync.host().track(Axis::Vertical), sync.host().thumb(Axis::Vertical));
    let second = sync.reconcile();
    let host_second = (sync.host().track(Axis::Vertical), sync.host().thumb(Axis::Vertical));

    assert_eq!(first, second);
    assert_eq!(host_first, host_second);
}

#[test]
fn reconcile_is_idempotent_mid_drag() {
    let host = HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(100.0, 400.0))
        .with_pixel_ratio(2.0);
    let mut sync = ScrollSync::mount(host, bare_config());
    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 3.0)));
    sync.pointer_move(Point::new(97.0, 20.3));

    let first = sync.reconcile();
    let second = sync.reconcile();
    assert_eq!(first, second);
    assert!(first.dragging.vertical);
    sync.pointer_up();
}

#[test]
fn dragging_one_axis_leaves_the_other_native() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(400.0, 400.0));
    sync.host_mut().scroll_to(Axis::Horizontal, 150.0);
    sync.on_scroll();
    let horizontal = sync.host().thumb(Axis::Horizontal);

    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 5.0)));
    sync.pointer_move(Point::new(60.0, 40.0));

    assert_eq!(sync.host().thumb(Axis::Horizontal), horizontal);
    assert_eq!(sync.host().scroll(Axis::Horizontal), 150.0);
    assert!(sync.host().scroll(Axis::Vertical) > 0.0);
    assert!(sync
        .host()
        .scroll_writes()
        .iter()
        .all(|(axis, _)| *axis == Axis::Vertical));
    sync.pointer_up();
}

#[test]
fn hit_test_finds_thumbs_and_tracks() {
    let mut sync = mount_bare(Size::new(100.0, 100.0), Size::new(400.0, 400.0));

    assert_eq!(sync.hit_test(Point::new(97.0, 5.0)), ScrollbarHitResult::VerticalThumb);
    assert_eq!(sync.hit_test(Point::new(97.0, 80.0)), ScrollbarHitResult::VerticalTrack);
    assert_eq!(sync.hit_test(Point::new(5.0, 97.0)), ScrollbarHitResult::HorizontalThumb);
    assert_eq!(sync.hit_test(Point::new(80.0, 97.0)), ScrollbarHitResult::HorizontalTrack);
    assert_eq!(sync.hit_test(Point::new(50.0, 50.0)), ScrollbarHitResult::None);

    assert_eq!(sync.pointer_press(Point::new(97.0, 5.0)), Some(Axis::Vertical));
    assert_eq!(sync.pointer_press(Point::new(50.0, 50.0)), None);
    sync.pointer_up();
}

#[test]
fn config_changes_apply_on_next_pass() {
    let handle = ConfigHandle::new(bare_config());
    let host = HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(100.0, 1000.0));
    let mut sync = ScrollSync::mount(host, handle.clone());
    assert!(approx(sync.host().thumb(Axis::Vertical).length, 10.0));

    handle.update(|config| {
        config.vertical.min_thumb_length = 30.0;
        config.vertical.thickness = ScrollbarSize::Wide.width();
    });
    let info = sync.on_config_change();
    assert_eq!(info.vertical.thumb.length, 30.0);
    assert_eq!(sync.host().track(Axis::Vertical).rect.width, 10.0);
}

#[test]
fn absolute_gutter_follows_scroll() {
    let config = ScrollAreaConfig::default().with_placement(GutterPlacement::Absolute);
    let host = HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(100.0, 400.0))
        .with_placement(GutterPlacement::Absolute);
    let mut sync = ScrollSync::mount(host, config);

    sync.host_mut().scroll_to(Axis::Vertical, 100.0);
    let info = sync.on_scroll();
    assert_eq!(info.vertical.track.rect.y, 102.0);

    // Thumb is 24px of a 96px track; at scroll 100 it sits at offset 24
    let thumb = info.vertical.thumb;
    assert!(approx(thumb.length, 24.0));
    assert!(approx(thumb.offset, 24.0));

    let press = Point::new(95.0, 2.0 + thumb.offset + 12.0);
    assert!(sync.pointer_down(Axis::Vertical, press));
    sync.pointer_move(Point::new(95.0, press.y + 36.0));
    assert!(approx(sync.host().scroll(Axis::Vertical), 250.0));

    // Re-reconcile after the native scroll event the write would trigger
    sync.on_scroll();
    sync.pointer_move(Point::new(95.0, press.y + 36.0));
    assert!(approx(sync.host().scroll(Axis::Vertical), 250.0));
    sync.pointer_up();
}

#[test]
fn teardown_releases_listeners_and_freezes_output() {
    let handle = ConfigHandle::default();
    let mut sync = ScrollSync::mount(
        HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(100.0, 400.0)),
        handle,
    );
    assert!(sync.pointer_down(Axis::Vertical, Point::new(95.0, 3.0)));
    assert_eq!(sync.host().active_listeners(), 2);

    sync.teardown();
    assert_eq!(sync.host().active_listeners(), 0);
    assert!(!sync.on_scroll().dragging.vertical);
}

#[test]
fn grab_point_follows_track_moved_by_config() {
    let handle = ConfigHandle::new(bare_config());
    let host = HeadlessViewport::new(Size::new(100.0, 200.0), Size::new(100.0, 800.0));
    let mut sync = ScrollSync::mount(host, handle.clone());

    // Middle of the 50px thumb
    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 25.0)));
    sync.pointer_move(Point::new(97.0, 75.0));
    assert!(approx(sync.host().thumb(Axis::Vertical).offset, 50.0));

    handle.update(|config| config.vertical.insets.top = 20.0);
    sync.on_config_change();
    sync.pointer_move(Point::new(97.0, 75.0));

    let origin = sync.host().track_origin(Axis::Vertical).y;
    let thumb = sync.host().thumb(Axis::Vertical);
    assert_eq!(origin, 20.0);
    assert!(approx(thumb.length, 45.0));
    assert!(approx(thumb.offset, 32.5));
    assert!(approx(origin + thumb.offset + 0.5 * thumb.length, 75.0));
    sync.pointer_up();
}

#[test]
fn grab_point_follows_viewport_moved_on_screen() {
    let mut sync = mount_bare(Size::new(100.0, 200.0), Size::new(100.0, 800.0));
    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 25.0)));

    sync.host_mut().set_origin(Point::new(0.0, 30.0));
    sync.pointer_move(Point::new(97.0, 105.0));

    let thumb = sync.host().thumb(Axis::Vertical);
    assert!(approx(thumb.offset, 50.0));
    assert!(approx(30.0 + thumb.offset + 0.5 * thumb.length, 105.0));
    sync.pointer_up();
}

/// Headless host whose live capture count outlives the engine
struct SharedCaptureHost {
    inner: HeadlessViewport,
    live: Rc<Cell<usize>>,
    misses: Rc<Cell<usize>>,
}

impl ScrollViewport for SharedCaptureHost {
    fn viewport_extent(&self, axis: Axis) -> f32 {
        self.inner.viewport_extent(axis)
    }

    fn content_extent(&self, axis: Axis) -> f32 {
        self.inner.content_extent(axis)
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        self.inner.scroll_offset(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f32) {
        self.inner.set_scroll_offset(axis, value);
    }
}

impl ScrollbarSurface for SharedCaptureHost {
    fn track_origin(&self, axis: Axis) -> Point {
        self.inner.track_origin(axis)
    }

    fn apply_track(&mut self, axis: Axis, track: &TrackLayout) {
        self.inner.apply_track(axis, track);
    }

    fn apply_thumb(&mut self, axis: Axis, thumb: &ThumbLayout) {
        self.inner.apply_thumb(axis, thumb);
    }
}

impl PointerCapture for SharedCaptureHost {
    fn capture(&mut self, axis: Axis) -> CaptureId {
        self.live.set(self.live.get() + 1);
        self.inner.capture(axis)
    }

    fn release(&mut self, id: CaptureId) {
        let misses_before = self.inner.release_misses();
        self.inner.release(id);
        if self.inner.release_misses() > misses_before {
            self.misses.set(self.misses.get() + 1);
        } else {
            self.live.set(self.live.get() - 1);
        }
    }
}

#[test]
fn dropping_engine_mid_drag_releases_listeners() {
    let live = Rc::new(Cell::new(0));
    let misses = Rc::new(Cell::new(0));
    let host = SharedCaptureHost {
        inner: HeadlessViewport::new(Size::new(100.0, 100.0), Size::new(400.0, 400.0)),
        live: Rc::clone(&live),
        misses: Rc::clone(&misses),
    };
    let mut sync = ScrollSync::mount(host, bare_config());

    assert!(sync.pointer_down(Axis::Vertical, Point::new(97.0, 5.0)));
    assert!(sync.pointer_down(Axis::Horizontal, Point::new(5.0, 97.0)));
    sync.pointer_move(Point::new(40.0, 40.0));
    assert_eq!(live.get(), 2);

    drop(sync);
    assert_eq!(live.get(), 0);
    assert_eq!(misses.get(), 0);
}
