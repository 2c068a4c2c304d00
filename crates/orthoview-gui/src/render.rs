use glam::Vec3;
use orthoview_core::camera::OrthographicCamera;
use orthoview_core::orientation::Interpolation;
use orthoview_core::render_loop::{FrameScheduler, Renderer};
use orthoview_core::scene::{Scene, SceneNode};
use orthoview_core::viewport::{Container, ContainerSize, Surface};
use orthoview_core::volume::StackHelper;

use crate::convert::{hex_color, hex_color_alpha, slice_to_color_image};
use crate::states::{TextureKey, ViewportState};

const BORDER_WIDTH: f32 = 1.5;
const BBOX_WIDTH: f32 = 1.0;

/// The central panel rectangle, seen as the viewer's container.
pub struct PanelContainer {
    pub rect: egui::Rect,
    pub pixels_per_point: f32,
}

impl Container for PanelContainer {
    fn offset_size(&self) -> ContainerSize {
        ContainerSize::new(self.rect.width(), self.rect.height())
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.pixels_per_point
    }
}

/// Asks egui for another frame, like `requestAnimationFrame`.
pub struct EguiScheduler<'a>(pub &'a egui::Context);

impl FrameScheduler for EguiScheduler<'_> {
    fn request_frame(&self) {
        self.0.request_repaint();
    }
}

/// Draws stack slices as textured quads projected by the camera.
pub struct SlicePainter<'a> {
    pub painter: egui::Painter,
    pub rect: egui::Rect,
    pub viewport: &'a mut ViewportState,
}

impl Renderer for SlicePainter<'_> {
    fn render(&mut self, scene: &Scene, camera: &OrthographicCamera, surface: &Surface) {
        self.painter.rect_filled(
            self.rect,
            0.0,
            hex_color_alpha(surface.clear_color, surface.clear_alpha),
        );
        for node in scene.children() {
            match node {
                SceneNode::Stack(helper) => self.draw_stack(helper, camera),
            }
        }
    }
}

impl SlicePainter<'_> {
    fn to_screen(&self, camera: &OrthographicCamera, world: Vec3) -> egui::Pos2 {
        let (x, y) = camera.project(world);
        self.rect.center() + egui::vec2(x, y)
    }

    fn draw_stack(&mut self, helper: &StackHelper, camera: &OrthographicCamera) {
        let Some(slice) = helper.current_slice() else {
            return;
        };

        let key = TextureKey {
            generation: self.viewport.generation,
            axis: helper.orientation(),
            index: helper.index(),
            interpolation: helper.interpolation(),
        };
        if self.viewport.texture_key != Some(key) || self.viewport.texture.is_none() {
            let options = match helper.interpolation() {
                Interpolation::Nearest => egui::TextureOptions::NEAREST,
                Interpolation::Linear => egui::TextureOptions::LINEAR,
            };
            let texture =
                self.painter
                    .ctx()
                    .load_texture("slice", slice_to_color_image(&slice), options);
            self.viewport.texture = Some(texture);
            self.viewport.texture_key = Some(key);
        }
        let Some(texture_id) = self.viewport.texture.as_ref().map(|t| t.id()) else {
            return;
        };

        let corners = slice.corners.map(|c| self.to_screen(camera, c));
        let uvs = [
            egui::pos2(0.0, 0.0),
            egui::pos2(1.0, 0.0),
            egui::pos2(1.0, 1.0),
            egui::pos2(0.0, 1.0),
        ];
        let mut mesh = egui::Mesh::with_texture(texture_id);
        for (pos, uv) in corners.iter().zip(uvs) {
            mesh.vertices.push(egui::epaint::Vertex {
                pos: *pos,
                uv,
                color: egui::Color32::WHITE,
            });
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(egui::Shape::mesh(mesh));

        if helper.border.visible {
            self.painter.add(egui::Shape::closed_line(
                corners.to_vec(),
                egui::Stroke::new(BORDER_WIDTH, hex_color(helper.border.color)),
            ));
        }
        if helper.bbox.visible {
            self.draw_bbox(helper, camera);
        }
    }

    fn draw_bbox(&self, helper: &StackHelper, camera: &OrthographicCamera) {
        let stack = helper.stack();
        let ijk_to_lps = stack.ijk_to_lps();
        let hi = stack.dimensions_ijk().as_vec3() - Vec3::splat(0.5);
        let corner = |n: usize| {
            let ijk = Vec3::new(
                if n & 1 == 0 { -0.5 } else { hi.x },
                if n & 2 == 0 { -0.5 } else { hi.y },
                if n & 4 == 0 { -0.5 } else { hi.z },
            );
            self.to_screen(camera, ijk_to_lps.transform_point3(ijk))
        };
        let stroke = egui::Stroke::new(BBOX_WIDTH, hex_color(helper.bbox.color));
        for a in 0..8usize {
            for bit in [1, 2, 4] {
                let b = a | bit;
                if b != a {
                    self.painter.line_segment([corner(a), corner(b)], stroke);
                }
            }
        }
    }
}
