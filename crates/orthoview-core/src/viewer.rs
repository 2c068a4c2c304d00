use glam::Vec3;
use tracing::{debug, error, info};

use crate::camera::{CameraBox, FitMode, FitOutcome, OrthographicCamera};
use crate::config::ViewerConfig;
use crate::controls::TrackballOrthoControls;
use crate::panel::{interpolation_from_panel, ConfigPanel, PanelEvent};
use crate::pipeline::{LoadError, LoadedVolume};
use crate::scene::{Scene, SceneNode};
use crate::viewport::{bootstrap, Container, ContainerSize, Surface};
use crate::volume::{Outline, StackHelper};

/// Whether a volume is on screen yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Ready,
    Failed(String),
}

/// What a resize did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    pub surface_size: ContainerSize,
    pub fit: FitOutcome,
}

/// Everything the viewer's callbacks share: surface, scene, camera,
/// controls and, once a volume is loaded, the configuration panel.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    container_size: ContainerSize,
    surface: Surface,
    scene: Scene,
    camera: OrthographicCamera,
    controls: TrackballOrthoControls,
    panel: Option<ConfigPanel>,
    readiness: Readiness,
}

impl Viewer {
    pub fn new(container: &dyn Container, config: ViewerConfig) -> Self {
        let surface = bootstrap(container, &config);
        let container_size = container.offset_size();

        let mut camera =
            OrthographicCamera::new(container_size, config.camera.near, config.camera.far);
        camera.set_orientation(config.camera.orientation);
        camera.set_convention(config.camera.convention);
        camera.update();

        let mut controls = TrackballOrthoControls::bind(&camera, container);
        controls.static_moving = config.camera.static_moving;
        controls.damping = config.camera.damping;

        debug!(
            width = container_size.width,
            height = container_size.height,
            "viewer created"
        );
        Self {
            config,
            container_size,
            surface,
            scene: Scene::new(),
            camera,
            controls,
            panel: None,
            readiness: Readiness::Pending,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn container_size(&self) -> ContainerSize {
        self.container_size
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    pub fn controls(&self) -> &TrackballOrthoControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut TrackballOrthoControls {
        &mut self.controls
    }

    pub fn panel(&self) -> Option<&ConfigPanel> {
        self.panel.as_ref()
    }

    pub fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    pub fn stack_helper(&self) -> Option<&StackHelper> {
        self.scene.stack_helper()
    }

    /// A new load has started; the current volume stays until it finishes.
    pub fn begin_load(&mut self) {
        self.readiness = Readiness::Pending;
    }

    /// Follow a container size change: canvas, framing, then surface.
    pub fn on_resize(&mut self, size: ContainerSize) -> ResizeOutcome {
        self.container_size = size;
        self.camera.set_canvas(size);
        let fit = self
            .camera
            .fit_box(FitMode::Both, self.config.camera.fit_factor);
        self.surface.set_size(size);
        self.controls.handle_resize(size);
        debug!(
            width = size.width,
            height = size.height,
            ?fit,
            "viewport resized"
        );
        ResizeOutcome {
            surface_size: self.surface.size(),
            fit,
        }
    }

    /// Apply pending pointer input to the camera.
    pub fn update_controls(&mut self) {
        self.controls.update(&mut self.camera);
    }

    /// Keep the panel widgets in step with the camera and helper.
    pub fn sync_panel(&mut self) {
        if let (Some(panel), Some(helper)) = (self.panel.as_mut(), self.scene.stack_helper()) {
            panel.listen(&self.camera, helper);
        }
    }

    /// Show a freshly loaded volume and frame it.
    pub fn attach_volume(&mut self, loaded: LoadedVolume) {
        let series_count = loaded.series().len();
        let mut helper = StackHelper::new(loaded.into_stack());
        let display = &self.config.stack;
        helper.bbox = Outline {
            visible: display.bbox_visible,
            color: display.bbox_color,
        };
        helper.border = Outline {
            visible: display.border_visible,
            color: display.border_color,
        };

        let stack = helper.stack();
        let bbox = stack.world_bounding_box();
        let extent = Vec3::new(bbox[1] - bbox[0], bbox[3] - bbox[2], bbox[5] - bbox[4]);
        let camera_box = CameraBox {
            center: stack.world_center(),
            half_dimensions: extent + Vec3::splat(self.config.camera.box_padding),
        };
        let directions = [stack.x_cosine(), stack.y_cosine(), stack.z_cosine()];
        let dims = stack.dimensions_ijk();

        self.camera.set_directions(directions);
        self.camera.set_box(camera_box);
        self.camera.set_canvas(self.container_size);
        self.camera.update();
        let fit = self
            .camera
            .fit_box(FitMode::Both, self.config.camera.fit_factor);
        helper.set_orientation(self.camera.stack_orientation());
        self.controls.reset();

        let panel = ConfigPanel::build(&self.camera, &helper);
        self.scene = Scene::new();
        self.scene.add(SceneNode::Stack(helper));
        self.panel = Some(panel);
        self.readiness = Readiness::Ready;

        info!(
            series = series_count,
            dims = %dims,
            center = %camera_box.center,
            ?fit,
            "volume attached"
        );
    }

    /// Continue after the load pipeline finished, either way.
    ///
    /// Failures are logged once and handed back; the scene is left as it was.
    pub fn handle_load_result(
        &mut self,
        result: Result<LoadedVolume, LoadError>,
    ) -> Result<(), LoadError> {
        match result {
            Ok(loaded) => {
                self.attach_volume(loaded);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "something went wrong while loading the volume");
                self.readiness = Readiness::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Run a panel change. Returns false when there is no panel yet.
    pub fn apply(&mut self, event: PanelEvent) -> bool {
        let Some(panel) = self.panel.as_mut() else {
            return false;
        };
        let event = panel.clamp(event);
        panel.record(event);

        let fit_factor = self.config.camera.fit_factor;
        match event {
            PanelEvent::InvertRows(_) => self.camera.invert_rows(),
            PanelEvent::InvertColumns(_) => self.camera.invert_columns(),
            PanelEvent::RotateRight => self.camera.rotate(None),
            PanelEvent::Angle(a) => self.camera.set_angle(a),
            PanelEvent::Orientation(orientation) => {
                self.camera.set_orientation(orientation);
                self.camera.update();
                panel.clear_inverts();
                self.camera.fit_box(FitMode::Both, fit_factor);
                let axis = self.camera.stack_orientation();
                if let Some(helper) = self.scene.stack_helper_mut() {
                    helper.set_orientation(axis);
                }
            }
            PanelEvent::Convention(convention) => {
                self.camera.set_convention(convention);
                self.camera.update();
                panel.clear_inverts();
                self.camera.fit_box(FitMode::Both, fit_factor);
            }
            PanelEvent::Index(i) => {
                if let Some(helper) = self.scene.stack_helper_mut() {
                    helper.set_index(i as usize);
                }
            }
            PanelEvent::Interpolation(v) => {
                if let Some(helper) = self.scene.stack_helper_mut() {
                    helper.set_interpolation(interpolation_from_panel(v));
                }
            }
        }
        debug!(?event, "panel change applied");
        self.sync_panel();
        true
    }
}
