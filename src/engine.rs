//! Render pipeline.
//!
//! [`RenderPipeline`] owns the [`DepthBuffer`] for the lifetime of a surface
//! size and drives one of two passes over a polygon list:
//!
//! - **Wireframe**: every boundary edge is traced with the flat depth of its
//!   first vertex.
//! - **Filled**: polygons are pre-sorted by ascending mean depth, fan
//!   triangulated and filled with per-pixel interpolated depth.
//!
//! The two passes source depth differently on purpose. Visibility is always
//! decided per pixel by the depth buffer; the fill pre-sort only decides who
//! keeps a pixel when interpolated depths tie.

use crate::colors::{self, Color};
use crate::config::RenderConfig;
use crate::geometry::{Polygon, Triangle, Vertex};
use crate::render::{
    DepthBuffer, EdgeRasterizer, EdgeTrace, Rasterizer, RasterizerDispatcher, RasterizerType,
    RenderError, Surface,
};
use crate::triangulate::{FanTriangulator, Triangulator};

/// Rendering mode for a full pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Wireframe,
    #[default]
    Filled,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
        }
    }
}

/// Advisory coordinate annotation for one vertex. Never depth tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLabel {
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// Suggested text color for callers that draw the label.
    pub color: Color,
}

impl VertexLabel {
    fn for_vertex(v: &Vertex) -> Self {
        let x = v.x.round() as i32;
        let y = v.y.round() as i32;
        Self {
            x,
            y,
            text: format!("({x}, {y})"),
            color: colors::LABEL,
        }
    }
}

/// Summary of one full render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Polygons that were rasterized.
    pub polygons: usize,
    /// Polygons dropped for having fewer than three vertices.
    pub skipped: usize,
    pub triangles: usize,
    pub edges: usize,
    /// Pixels that passed the depth test.
    pub pixels: usize,
    pub labels: Vec<VertexLabel>,
}

pub struct RenderPipeline {
    depth: DepthBuffer,
    rasterizer: RasterizerDispatcher,
    triangulator: Box<dyn Triangulator>,
    edges: EdgeRasterizer,
    render_mode: RenderMode,
    pub label_vertices: bool,
    triangles: Vec<Triangle>,
}

impl RenderPipeline {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        Ok(Self {
            depth: DepthBuffer::new(width, height)?,
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
            triangulator: Box::new(FanTriangulator::new()),
            edges: EdgeRasterizer::new(),
            render_mode: RenderMode::default(),
            label_vertices: false,
            triangles: Vec::new(),
        })
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let mut pipeline = Self::new(config.width, config.height)?;
        pipeline.set_render_mode(config.mode);
        pipeline.set_rasterizer(config.rasterizer);
        pipeline.label_vertices = config.label_vertices;
        Ok(pipeline)
    }

    pub fn width(&self) -> u32 {
        self.depth.width()
    }

    pub fn height(&self) -> u32 {
        self.depth.height()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// Swap the polygon decomposition, e.g. for concave input.
    pub fn set_triangulator(&mut self, triangulator: Box<dyn Triangulator>) {
        self.triangulator = triangulator;
    }

    pub fn set_edge_color(&mut self, color: Color) {
        self.edges = EdgeRasterizer::with_color(color);
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth
    }

    pub fn clear_depth(&mut self) {
        self.depth.clear();
    }

    /// Run a full pass in the current mode. Clears the depth buffer and the
    /// surface first.
    pub fn render(&mut self, polygons: &[Polygon], surface: &mut dyn Surface) -> RenderReport {
        match self.render_mode {
            RenderMode::Wireframe => self.render_wireframe(polygons, surface),
            RenderMode::Filled => self.render_filled(polygons, surface),
        }
    }

    fn begin_pass(&mut self, surface: &mut dyn Surface) {
        self.depth.clear();
        surface.clear();
    }

    fn renderable<'p>(polygons: &'p [Polygon], report: &mut RenderReport) -> Vec<&'p Polygon> {
        polygons
            .iter()
            .filter(|p| {
                if p.is_renderable() {
                    true
                } else {
                    log::warn!(
                        "skipping polygon with {} vertices (need at least 3)",
                        p.vertices.len()
                    );
                    report.skipped += 1;
                    false
                }
            })
            .collect()
    }

    pub fn render_wireframe(
        &mut self,
        polygons: &[Polygon],
        surface: &mut dyn Surface,
    ) -> RenderReport {
        self.begin_pass(surface);
        let mut report = RenderReport::default();

        for polygon in Self::renderable(polygons, &mut report) {
            for (start, end) in polygon.edges() {
                let trace = self.draw_edge(start, end, start.z, surface);
                report.edges += 1;
                report.pixels += trace.accepted as usize;
            }
            report.polygons += 1;
        }

        log::debug!(
            "wireframe pass: {} polygons, {} edges, {} pixels",
            report.polygons,
            report.edges,
            report.pixels
        );
        report
    }

    pub fn render_filled(&mut self, polygons: &[Polygon], surface: &mut dyn Surface) -> RenderReport {
        self.begin_pass(surface);
        let mut report = RenderReport::default();

        let mut ordered = Self::renderable(polygons, &mut report);
        // Stable, so equal mean depths keep submission order.
        ordered.sort_by(|a, b| a.mean_depth().total_cmp(&b.mean_depth()));

        for polygon in &ordered {
            self.triangles.clear();
            self.triangulator.triangulate_into(polygon, &mut self.triangles);
            for triangle in &self.triangles {
                report.pixels += self
                    .rasterizer
                    .fill_triangle(triangle, &mut self.depth, surface);
            }
            report.triangles += self.triangles.len();
            report.polygons += 1;
        }

        if self.label_vertices {
            report.labels = ordered
                .iter()
                .flat_map(|p| p.vertices.iter().map(VertexLabel::for_vertex))
                .collect();
        }

        log::debug!(
            "fill pass ({}): {} polygons, {} triangles, {} pixels",
            self.rasterizer.active_type(),
            report.polygons,
            report.triangles,
            report.pixels
        );
        report
    }

    /// Trace one edge against the shared depth buffer without clearing it.
    pub fn draw_edge(
        &mut self,
        start: Vertex,
        end: Vertex,
        depth: f32,
        surface: &mut dyn Surface,
    ) -> EdgeTrace {
        self.edges.draw_edge(start, end, depth, &mut self.depth, surface)
    }
}

/// What a single [`WireframeStepper::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to draw.
    Empty,
    Drew {
        polygon: usize,
        /// Zero-based edge index within the polygon.
        edge: usize,
        edges: usize,
        /// Pixels of the edge that passed the depth test.
        pixels: u32,
    },
    /// Every edge of `polygon` is drawn; the cursor moved to the next one.
    PolygonComplete { polygon: usize },
    /// The last polygon is done; the cursor wrapped to the first.
    Finished,
}

/// Traces a polygon list one edge per call.
///
/// Steps share the pipeline's depth buffer and never clear it, so edges
/// drawn earlier keep their depth. Use [`WireframeStepper::reset`] to start
/// over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireframeStepper {
    polygon: usize,
    edge: usize,
}

impl WireframeStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(polygon, edge)` that the next step will draw.
    pub fn cursor(&self) -> (usize, usize) {
        (self.polygon, self.edge)
    }

    pub fn reset(&mut self, pipeline: &mut RenderPipeline) {
        *self = Self::default();
        pipeline.clear_depth();
    }

    pub fn step(
        &mut self,
        pipeline: &mut RenderPipeline,
        polygons: &[Polygon],
        surface: &mut dyn Surface,
    ) -> StepOutcome {
        if polygons.is_empty() {
            return StepOutcome::Empty;
        }
        if self.polygon >= polygons.len() {
            self.polygon = 0;
            self.edge = 0;
        }

        let polygon = &polygons[self.polygon];
        let edges = if polygon.is_renderable() {
            polygon.vertices.len()
        } else {
            0
        };

        if self.edge < edges {
            let n = polygon.vertices.len();
            let start = polygon.vertices[self.edge];
            let end = polygon.vertices[(self.edge + 1) % n];
            let trace = pipeline.draw_edge(start, end, start.z, surface);
            let outcome = StepOutcome::Drew {
                polygon: self.polygon,
                edge: self.edge,
                edges,
                pixels: trace.accepted,
            };
            self.edge += 1;
            return outcome;
        }

        let completed = self.polygon;
        self.polygon += 1;
        self.edge = 0;
        if self.polygon >= polygons.len() {
            self.polygon = 0;
            StepOutcome::Finished
        } else {
            StepOutcome::PolygonComplete { polygon: completed }
        }
    }
}
