// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};
use vantage_gallery::{DecodeError, DimensionStore, Gallery, ImageId, SelectionListenerId};
use vantage_gesture::pan::PanGesture;
use vantage_gesture::pinch::PinchState;
use vantage_gesture::swipe::{GestureSample, SwipeContext};
use vantage_imaging::Surface;
use vantage_minimap::{MiniMapAction, MiniMapLayout, MiniMapProjector, ViewSnapshot};
use vantage_view::{ListenerId, Transform, TransformEngine};

use crate::ViewerConfig;

/// One image viewer: the main view, its gestures, the gallery, and the
/// mini-maps.
///
/// All host input goes through this type. It owns the single
/// [`TransformEngine`], so gestures and mini-map clicks can only change the
/// view through clamped engine commands.
#[derive(Debug)]
pub struct ImageViewer {
    config: ViewerConfig,
    engine: TransformEngine,
    pan: PanGesture,
    pinch: PinchState,
    gallery: Gallery,
    dimensions: DimensionStore,
    projector: MiniMapProjector,
}

impl ImageViewer {
    /// Creates a viewer showing the first entry of `gallery`.
    ///
    /// `container` may be zero until the host has laid out the view; call
    /// [`Self::resize`] once it is known.
    #[must_use]
    pub fn new(config: ViewerConfig, gallery: Gallery, container: Size) -> Self {
        Self {
            config,
            engine: TransformEngine::new(config.view, container),
            pan: PanGesture::new(),
            pinch: PinchState::default(),
            gallery,
            dimensions: DimensionStore::new(),
            projector: MiniMapProjector::new(config.style, config.max_canvas),
        }
    }

    /// Configuration the viewer was created with.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The main view's engine, for reading state.
    #[must_use]
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Current transform of the main view.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.engine.transform()
    }

    /// The gallery being navigated.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Id of the image in the main view.
    #[must_use]
    pub fn current_id(&self) -> Option<ImageId> {
        self.gallery.current_id()
    }

    /// Decode state of every image.
    #[must_use]
    pub fn dimensions(&self) -> &DimensionStore {
        &self.dimensions
    }

    /// Natural dimensions of the image in the main view, once decoded.
    #[must_use]
    pub fn current_dimensions(&self) -> Option<Size> {
        self.dimensions.get(self.current_id()?)
    }

    /// Registers a listener for committed transform changes.
    pub fn on_transform(&mut self, listener: impl FnMut(&Transform) + 'static) -> ListenerId {
        self.engine.subscribe(listener)
    }

    /// Registers a listener for changes of the current image.
    pub fn on_image_change(
        &mut self,
        listener: impl FnMut(ImageId) + 'static,
    ) -> SelectionListenerId {
        self.gallery.subscribe(listener)
    }

    /// Removes a transform listener. Returns `false` if it was not registered.
    pub fn remove_transform_listener(&mut self, id: ListenerId) -> bool {
        self.engine.unsubscribe(id)
    }

    /// Removes an image-change listener. Returns `false` if it was not
    /// registered.
    pub fn remove_image_listener(&mut self, id: SelectionListenerId) -> bool {
        self.gallery.unsubscribe(id)
    }

    /// The container was laid out or resized.
    pub fn resize(&mut self, size: Size) {
        log::debug!("container resized to {}x{}", size.width, size.height);
        self.engine.set_container(size);
    }

    /// Marks `id` as being decoded. Returns `true` if the host should start
    /// decoding it.
    pub fn request_dimensions(&mut self, id: ImageId) -> bool {
        self.dimensions.request(id)
    }

    /// The host finished decoding `id`.
    ///
    /// Returns `Ok(false)` if the image had already failed and was not
    /// retried.
    pub fn image_decoded(&mut self, id: ImageId, natural: Size) -> Result<bool, DecodeError> {
        match self.dimensions.resolve(id, natural) {
            Ok(stored) => {
                log::debug!(
                    "image {id} decoded at {}x{} (stored: {stored})",
                    natural.width,
                    natural.height
                );
                Ok(stored)
            }
            Err(err) => {
                log::warn!("{err}");
                Err(err)
            }
        }
    }

    /// The host failed to decode `id`.
    pub fn image_failed(&mut self, id: ImageId, reason: impl Into<String>) -> DecodeError {
        let err = self.dimensions.fail(id, reason);
        log::warn!("{err}");
        err
    }

    /// Asks for a failed image to be decoded again. Returns `true` if the
    /// host should start a new decode.
    pub fn retry(&mut self, id: ImageId) -> bool {
        let retried = self.dimensions.retry(id);
        if retried {
            log::debug!("retrying decode of image {id}");
        }
        retried
    }

    /// A pointer went down on the main view.
    ///
    /// Any pan already in progress is discarded.
    pub fn pan_start(&mut self, sample: GestureSample) {
        self.pan.begin(sample);
    }

    /// The pointer moved during a pan. Returns the committed transform, or
    /// `None` if no pan is in progress.
    pub fn pan_move(&mut self, position: Point) -> Option<Transform> {
        let delta = self.pan.moved(position)?;
        log::trace!("pan by ({}, {})", delta.x, delta.y);
        Some(self.engine.pan_by(delta))
    }

    /// The pointer was released.
    ///
    /// The release position is applied as a final move, then the gesture is
    /// classified against the resulting view. Returns the newly current image if it was a swipe
    /// that changed the image.
    pub fn pan_end(&mut self, sample: GestureSample) -> Option<ImageId> {
        if let Some(delta) = self.pan.moved(sample.position) {
            self.engine.pan_by(delta);
        }
        let edges = self.engine.edge_contact();
        let context = SwipeContext::at_scale(self.engine.scale(), self.engine.config().min_scale)
            .with_edges(edges.left, edges.right);
        let intent = self.pan.end(sample, &context, &self.config.swipe)?;
        log::debug!("swipe classified as {intent:?} at scale {}", context.scale);

        let before = self.gallery.revision();
        let id = self.gallery.apply(intent)?;
        self.switched(before).then_some(id)
    }

    /// Abandons the current pan without classifying it.
    pub fn pan_cancel(&mut self) {
        self.pan.cancel();
    }

    /// Mouse wheel over the main view; positive notches zoom in.
    pub fn wheel(&mut self, notches: f64, anchor: Point) -> Transform {
        self.engine.zoom_by_wheel(notches, Some(anchor))
    }

    /// A second finger landed. Cancels any pan in progress.
    ///
    /// Returns `false` if the fingers are too close to track.
    pub fn pinch_start(&mut self, a: Point, b: Point) -> bool {
        self.pan.cancel();
        self.pinch.begin(a, b, self.engine.scale())
    }

    /// The fingers moved during a pinch.
    pub fn pinch_move(&mut self, a: Point, b: Point) -> Option<Transform> {
        let update = self.pinch.update(a, b)?;
        Some(self.engine.zoom_to(update.target_scale, Some(update.anchor), 0.0))
    }

    /// A finger lifted, ending the pinch.
    pub fn pinch_end(&mut self) {
        self.pinch.end();
    }

    /// Double-click on the main view: animate back to the initial view.
    pub fn double_click(&mut self) -> Transform {
        self.engine.reset(self.config.view.animation_ms)
    }

    /// Makes `id` the current image. The view is reset when it changes.
    pub fn select_image(&mut self, id: ImageId) -> bool {
        let before = self.gallery.revision();
        self.gallery.select(id);
        self.switched(before)
    }

    /// Moves to the next image, wrapping around.
    pub fn next(&mut self) -> Option<ImageId> {
        let before = self.gallery.revision();
        let id = self.gallery.next()?;
        self.switched(before);
        Some(id)
    }

    /// Moves to the previous image, wrapping around.
    pub fn previous(&mut self) -> Option<ImageId> {
        let before = self.gallery.revision();
        let id = self.gallery.previous()?;
        self.switched(before);
        Some(id)
    }

    /// Snapshot of the main view for mini-map projection.
    #[must_use]
    pub fn view_snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&self.engine)
    }

    /// A click at `click` (canvas pixels) on `entry`'s mini-map.
    ///
    /// Returns what the click did.
    pub fn mini_map_click(&mut self, entry: ImageId, click: Point) -> MiniMapAction {
        if self.gallery.get(entry).is_none() {
            log::warn!("mini-map click for unknown image {entry}");
            return MiniMapAction::Ignore;
        }
        let action = self.projector.hit(
            entry,
            self.current_id(),
            self.dimensions.get(entry),
            &self.view_snapshot(),
            click,
        );
        match action {
            MiniMapAction::Select(id) => {
                self.select_image(id);
            }
            MiniMapAction::Recenter(offset) => {
                let scale = self.engine.scale();
                let target = self.engine.position_for_focus(offset, scale);
                log::debug!(
                    "mini-map recenter on offset ({}, {}) -> ({}, {})",
                    offset.x,
                    offset.y,
                    target.x,
                    target.y
                );
                self.engine
                    .set_transform(target.x, target.y, scale, self.config.view.animation_ms);
            }
            MiniMapAction::Ignore => {}
        }
        action
    }

    /// Redraws `entry`'s mini-map onto `surface`.
    ///
    /// `image` is the host's decoded bitmap for the entry, if it has one.
    /// Returns `None` for ids that are not in the gallery.
    pub fn render_mini_map<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        entry: ImageId,
        image: Option<&S::Image>,
    ) -> Option<MiniMapLayout> {
        self.gallery.get(entry)?;
        let active = (self.current_id() == Some(entry)).then(|| self.view_snapshot());
        Some(self.projector.draw_entry(
            surface,
            image,
            self.dimensions.get(entry),
            active.as_ref(),
        ))
    }

    /// Resets the view if the gallery moved past `before`.
    fn switched(&mut self, before: u64) -> bool {
        if self.gallery.revision() == before {
            return false;
        }
        self.pan.cancel();
        self.pinch.end();
        self.engine.reset(0.0);
        if let Some(id) = self.current_id() {
            log::debug!("switched to image {id}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Size};
    use vantage_gallery::{Gallery, ImageDescriptor, ImageId};
    use vantage_gesture::swipe::GestureSample;
    use vantage_imaging::RecordingSurface;
    use vantage_minimap::MiniMapAction;

    use super::ImageViewer;
    use crate::ViewerConfig;

    fn viewer() -> ImageViewer {
        let gallery = Gallery::new((1..=3).map(|n| {
            ImageDescriptor::new(ImageId(n), "Menu", "/full.png", "/thumb.png")
        }));
        ImageViewer::new(ViewerConfig::default(), gallery, Size::new(800.0, 600.0))
    }

    #[test]
    fn image_switch_resets_zoom() {
        let mut v = viewer();
        v.wheel(5.0, Point::new(100.0, 100.0));
        assert!(v.transform().scale > 1.0);
        assert!(v.select_image(ImageId(2)));
        assert_eq!(v.transform().scale, 1.0);
        assert!(!v.select_image(ImageId(2)));
        assert!(!v.select_image(ImageId(99)));
    }

    #[test]
    fn pinch_zooms_around_midpoint_and_cancels_pan() {
        let mut v = viewer();
        v.pan_start(GestureSample::new(Point::new(300.0, 300.0), 0.0));
        assert!(v.pinch_start(Point::new(300.0, 300.0), Point::new(500.0, 300.0)));
        let t = v
            .pinch_move(Point::new(200.0, 300.0), Point::new(600.0, 300.0))
            .unwrap();
        assert_eq!(t.scale, 2.0);
        assert_eq!(v.engine().container_to_content(Point::new(400.0, 300.0)), Point::new(400.0, 300.0));

        // The pan was cancelled, so releasing does nothing.
        assert_eq!(v.pan_end(GestureSample::new(Point::new(100.0, 300.0), 50.0)), None);
        v.pinch_end();
        assert!(v.pinch_move(Point::ZERO, Point::new(50.0, 0.0)).is_none());
    }

    #[test]
    fn double_click_animates_back_to_fit() {
        let mut v = viewer();
        v.wheel(10.0, Point::new(400.0, 300.0));
        let t = v.double_click();
        assert_eq!(t.scale, 1.0);
        let transition = v.engine().transition().unwrap();
        assert_eq!(transition.duration_ms, v.config().view.animation_ms);
    }

    #[test]
    fn failed_decodes_leave_mini_map_blank() {
        let mut v = viewer();
        assert!(v.request_dimensions(ImageId(1)));
        v.image_failed(ImageId(1), "network error");
        assert_eq!(v.current_dimensions(), None);

        let mut surface = RecordingSurface::<u32>::default();
        let layout = v.render_mini_map(&mut surface, ImageId(1), Some(&1)).unwrap();
        assert_eq!(layout.canvas, Size::new(200.0, 140.0));
        assert_eq!(surface.ops().len(), 2);

        assert!(v.retry(ImageId(1)));
        assert_eq!(v.image_decoded(ImageId(1), Size::new(1600.0, 1200.0)), Ok(true));
        assert!(v.render_mini_map(&mut surface, ImageId(42), None).is_none());
    }

    #[test]
    fn release_position_counts_as_a_final_move() {
        let mut v = viewer();
        v.wheel(10.0, Point::new(400.0, 300.0));
        let before = v.transform();

        // No move events between press and release.
        v.pan_start(GestureSample::new(Point::new(400.0, 300.0), 0.0));
        assert_eq!(v.pan_end(GestureSample::new(Point::new(300.0, 300.0), 2_000.0)), None);

        let after = v.transform();
        assert!((after.position_x - (before.position_x - 100.0)).abs() < 1e-9);
        assert_eq!(after.position_y, before.position_y);
    }

    #[test]
    fn mini_map_clicks_for_unknown_images_are_ignored() {
        let mut v = viewer();
        v.wheel(10.0, Point::new(400.0, 300.0));
        let before = v.transform();
        assert_eq!(v.mini_map_click(ImageId(42), Point::new(10.0, 10.0)), MiniMapAction::Ignore);
        assert_eq!(v.current_id(), Some(ImageId(1)));
        assert_eq!(v.transform(), before);
    }

    #[test]
    fn removed_listeners_are_not_called() {
        let mut v = viewer();
        let images = Rc::new(Cell::new(0_u32));
        let transforms = Rc::new(Cell::new(0_u32));
        let i = Rc::clone(&images);
        let t = Rc::clone(&transforms);
        let image_id = v.on_image_change(move |_| i.set(i.get() + 1));
        let transform_id = v.on_transform(move |_| t.set(t.get() + 1));

        v.next();
        assert!(v.remove_image_listener(image_id));
        assert!(v.remove_transform_listener(transform_id));
        v.wheel(10.0, Point::new(400.0, 300.0));
        v.next();

        assert_eq!(images.get(), 1);
        assert_eq!(transforms.get(), 0);
        assert!(!v.remove_image_listener(image_id));
    }
}
