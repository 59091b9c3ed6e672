//! Line chart with up to two series on independent Y axes.
//!
//! Each series holds a fixed number of points. New values shift the series
//! left: the oldest point drops off and the newest is plotted at the right
//! edge. Slots that never received a value are not plotted.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use heapless::Vec;

use crate::colors::{BACKGROUND, GRID_GRAY};
use crate::config::layout::{CHART_H_DIVISIONS, CHART_POINT_COUNT, CHART_V_DIVISIONS};

/// Maximum number of series per chart.
pub const MAX_SERIES: usize = 2;

/// Diameter of the dot drawn on each point.
const POINT_DIAMETER: u32 = 5;

/// Inset keeping dots inside the frame.
const PLOT_INSET: u32 = POINT_DIAMETER / 2 + 1;

const GRID_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRID_GRAY, 1);

/// Which Y range a series is scaled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Primary,
    Secondary,
}

/// Handle returned by [`Chart::add_series`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesId(usize);

/// A fixed-length ring of optional points.
pub struct Series {
    points: [Option<i32>; CHART_POINT_COUNT],
    start: usize,
    color: Rgb565,
    axis: Axis,
}

impl Series {
    const fn new(
        color: Rgb565,
        axis: Axis,
    ) -> Self {
        Self {
            points: [None; CHART_POINT_COUNT],
            start: 0,
            color,
            axis,
        }
    }

    fn push(
        &mut self,
        value: i32,
    ) {
        self.points[self.start] = Some(value);
        self.start = (self.start + 1) % CHART_POINT_COUNT;
    }

    /// Points from oldest (left) to newest (right).
    pub fn iter(&self) -> impl Iterator<Item = Option<i32>> + '_ {
        (0..CHART_POINT_COUNT).map(move |i| self.points[(self.start + i) % CHART_POINT_COUNT])
    }

    /// Most recently added value.
    pub fn latest(&self) -> Option<i32> { self.points[(self.start + CHART_POINT_COUNT - 1) % CHART_POINT_COUNT] }

    /// Number of slots holding a value.
    pub fn len(&self) -> usize { self.points.iter().filter(|p| p.is_some()).count() }

    /// Whether no value was added yet.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Series line color.
    pub const fn color(&self) -> Rgb565 { self.color }

    /// Axis the series is scaled against.
    pub const fn axis(&self) -> Axis { self.axis }
}

/// Line chart widget.
pub struct Chart {
    area: Rectangle,
    primary_range: (i32, i32),
    secondary_range: (i32, i32),
    series: Vec<Series, MAX_SERIES>,
    dirty: bool,
}

impl Chart {
    /// Create an empty chart with the given axis ranges.
    pub const fn new(
        area: Rectangle,
        primary_range: (i32, i32),
        secondary_range: (i32, i32),
    ) -> Self {
        Self {
            area,
            primary_range,
            secondary_range,
            series: Vec::new(),
            dirty: true,
        }
    }

    /// Add a series. Returns `None` once [`MAX_SERIES`] are in use.
    pub fn add_series(
        &mut self,
        color: Rgb565,
        axis: Axis,
    ) -> Option<SeriesId> {
        let id = SeriesId(self.series.len());
        self.series.push(Series::new(color, axis)).ok()?;
        self.dirty = true;
        Some(id)
    }

    /// Shift a new value into a series (fraction truncated).
    pub fn set_next_value(
        &mut self,
        id: SeriesId,
        value: f32,
    ) {
        if let Some(series) = self.series.get_mut(id.0) {
            series.push(value as i32);
            self.dirty = true;
        }
    }

    /// Access a series.
    pub fn series(
        &self,
        id: SeriesId,
    ) -> Option<&Series> {
        self.series.get(id.0)
    }

    /// Chart frame.
    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Whether the chart changed since it was last drawn.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Force a redraw on the next [`draw`](Self::draw).
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = true; }

    const fn range(
        &self,
        axis: Axis,
    ) -> (i32, i32) {
        match axis {
            Axis::Primary => self.primary_range,
            Axis::Secondary => self.secondary_range,
        }
    }

    /// Screen position of point `index` with `value` on `axis`.
    ///
    /// Values outside the axis range are pinned to the plot edge.
    pub fn point_position(
        &self,
        axis: Axis,
        index: usize,
        value: i32,
    ) -> Point {
        let plot_w = self.area.size.width.saturating_sub(2 * PLOT_INSET + 1) as i32;
        let plot_h = self.area.size.height.saturating_sub(2 * PLOT_INSET + 1) as i32;
        let left = self.area.top_left.x + PLOT_INSET as i32;
        let bottom = self.area.top_left.y + PLOT_INSET as i32 + plot_h;

        let x = left + plot_w * index as i32 / (CHART_POINT_COUNT as i32 - 1).max(1);

        let (min, max) = self.range(axis);
        let span = (max - min).max(1);
        let clamped = value.clamp(min, max);
        let y = bottom - plot_h * (clamped - min) / span;

        Point::new(x, y)
    }

    /// Draw frame, grid and all series. Clears the dirty flag.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.area
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
            .draw(display)?;
        self.draw_grid(display)?;

        for series in &self.series {
            self.draw_series(display, series)?;
        }

        self.dirty = false;
        Ok(())
    }

    fn draw_grid<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Rectangle { top_left, size } = self.area;
        let right = top_left.x + size.width as i32 - 1;
        let bottom = top_left.y + size.height as i32 - 1;

        for i in 1..=CHART_H_DIVISIONS {
            let y = top_left.y + (size.height * i / (CHART_H_DIVISIONS + 1)) as i32;
            Line::new(Point::new(top_left.x, y), Point::new(right, y))
                .into_styled(GRID_STYLE)
                .draw(display)?;
        }
        for i in 1..=CHART_V_DIVISIONS {
            let x = top_left.x + (size.width * i / (CHART_V_DIVISIONS + 1)) as i32;
            Line::new(Point::new(x, top_left.y), Point::new(x, bottom))
                .into_styled(GRID_STYLE)
                .draw(display)?;
        }

        self.area.into_styled(GRID_STYLE).draw(display)
    }

    fn draw_series<D>(
        &self,
        display: &mut D,
        series: &Series,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let line_style = PrimitiveStyle::with_stroke(series.color, 2);
        let dot_style = PrimitiveStyle::with_fill(series.color);
        let mut prev: Option<Point> = None;

        for (index, point) in series.iter().enumerate() {
            let Some(value) = point else {
                prev = None;
                continue;
            };
            let position = self.point_position(series.axis, index, value);
            if let Some(from) = prev {
                Line::new(from, position).into_styled(line_style).draw(display)?;
            }
            Circle::with_center(position, POINT_DIAMETER)
                .into_styled(dot_style)
                .draw(display)?;
            prev = Some(position);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
