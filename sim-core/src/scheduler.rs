//! Row-band partitioning and the scoped worker fan-out.
//!
//! The image is split into contiguous horizontal bands, one per worker.
//! Each worker receives a disjoint `&mut` slice of the output buffer, so no
//! locking is needed; `std::thread::scope` is the join barrier.

use crate::{
    field_lut::FieldSource,
    image::ColorBuffer,
    integrator::Integrator,
};
use glam::Vec2;

/// Half-open range of rows `[start_y, end_y)` owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowBand {
    pub start_y: usize,
    pub end_y: usize,
}

impl RowBand {
    #[inline]
    pub fn len(&self) -> usize {
        self.end_y - self.start_y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_y == self.start_y
    }
}

/// Splits `[0, height)` into `workers` contiguous bands of
/// `height / workers` rows. The last band absorbs the remainder.
///
/// A worker count of zero is treated as one.
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowBand> {
    let workers = workers.max(1);
    let rows_per_worker = height / workers;

    (0..workers)
        .map(|i| {
            let start_y = i * rows_per_worker;
            let end_y = if i + 1 == workers {
                height
            } else {
                start_y + rows_per_worker
            };
            RowBand { start_y, end_y }
        })
        .collect()
}

/// Fills a row-major `buffer` of the given `width` by calling `cell(x, y)`
/// for every pixel, one thread per non-empty band.
///
/// `bands` must cover the buffer's rows contiguously from row 0, which is
/// what [`partition_rows`] produces. A single band runs on the caller's
/// thread. A panic in any worker propagates to the caller.
pub fn fill_bands<T, F>(buffer: &mut [T], width: usize, bands: &[RowBand], cell: F)
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    let covered: usize = bands.iter().map(RowBand::len).sum();
    assert_eq!(
        buffer.len(),
        covered * width,
        "row bands must cover the whole buffer"
    );
    if buffer.is_empty() {
        return;
    }

    if let [band] = bands {
        fill_stripe(buffer, width, *band, &cell);
        return;
    }

    // Split buffer into disjoint stripes before handing them out.
    let mut stripes = Vec::with_capacity(bands.len());
    let mut remaining = buffer;
    for band in bands {
        let (stripe, rest) = std::mem::take(&mut remaining).split_at_mut(band.len() * width);
        stripes.push((*band, stripe));
        remaining = rest;
    }

    log::debug!("dispatching {} row bands", stripes.len());

    std::thread::scope(|s| {
        for (band, stripe) in stripes {
            if band.is_empty() {
                continue;
            }
            let cell = &cell;
            s.spawn(move || fill_stripe(stripe, width, band, cell));
        }
    });
}

fn fill_stripe<T, F>(stripe: &mut [T], width: usize, band: RowBand, cell: &F)
where
    F: Fn(usize, usize) -> T,
{
    for (row, y) in stripe.chunks_exact_mut(width).zip(band.start_y..band.end_y) {
        for (x, out) in row.iter_mut().enumerate() {
            *out = cell(x, y);
        }
    }
}

/// Runs the integrator for every pixel of a `width × height` image.
pub fn render<S: FieldSource>(
    width: usize,
    height: usize,
    workers: usize,
    integrator: &Integrator,
    field: &S,
) -> ColorBuffer {
    let mut image = ColorBuffer::filled(width, height, integrator.background());
    let bands = partition_rows(height, workers);

    fill_bands(image.pixels_mut(), width, &bands, |x, y| {
        integrator.color_for(Vec2::new(x as f32, y as f32), field)
    });

    image
}
