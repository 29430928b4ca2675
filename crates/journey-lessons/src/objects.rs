//! Fixed table of per-object draw state.
//!
//! Each record pairs immutable random parameters with a staging copy of the
//! object's uniform block and whatever GPU bindings back it (`B`). The table is
//! built once; its length never changes afterwards.

use std::ops::RangeInclusive;

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use journey_engine::paint::Color;

/// Number of objects the uniform lesson draws.
pub const OBJECT_COUNT: usize = 100;

pub const SCALE_RANGE: RangeInclusive<f32> = 0.2..=0.5;
pub const OFFSET_RANGE: RangeInclusive<f32> = -0.9..=0.9;

/// Uniform block of one object, laid out as the WGSL `ObjectUniform` struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ObjectUniform {
    pub color: [f32; 4],
    pub scale: [f32; 2],
    pub offset: [f32; 2],
}

impl ObjectUniform {
    /// Size in bytes (eight floats).
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

/// Immutable per-object parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObjectParams {
    /// Uniform scale before aspect correction.
    pub scale: f32,
    /// Opaque fill color.
    pub color: Color,
    /// Clip-space translation.
    pub offset: [f32; 2],
}

impl ObjectParams {
    /// Draws color, offset and scale independently and uniformly from their ranges.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = Color::rgb(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        );
        let offset = [rng.gen_range(OFFSET_RANGE), rng.gen_range(OFFSET_RANGE)];
        let scale = rng.gen_range(SCALE_RANGE);

        Self {
            scale,
            color,
            offset,
        }
    }

    /// Scale fields for a surface of the given aspect ratio (`width / height`).
    ///
    /// X is divided by the aspect so triangles keep their shape on wide surfaces.
    #[inline]
    pub fn scale_for_aspect(&self, aspect: f32) -> [f32; 2] {
        [self.scale / aspect, self.scale]
    }

    /// Uniform contents before the first frame (square surface).
    fn initial_uniform(&self) -> ObjectUniform {
        ObjectUniform {
            color: self.color.to_array(),
            scale: self.scale_for_aspect(1.0),
            offset: self.offset,
        }
    }
}

/// One entry of the table: parameters, staging uniform and GPU bindings.
#[derive(Debug)]
pub struct ObjectRecord<B> {
    params: ObjectParams,
    uniform: ObjectUniform,
    bindings: B,
}

impl<B> ObjectRecord<B> {
    pub fn params(&self) -> &ObjectParams {
        &self.params
    }

    /// Last staged uniform contents.
    pub fn uniform(&self) -> &ObjectUniform {
        &self.uniform
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }
}

/// Receives the per-object commands of one frame, in table order.
///
/// For every object, `write_uniform` is called exactly once and then `draw`.
pub trait ObjectSink<B> {
    /// Pushes the staged uniform to the object's device buffer.
    fn write_uniform(&mut self, bindings: &B, uniform: &ObjectUniform);

    /// Binds the object's resources and draws its triangle.
    fn draw(&mut self, bindings: &B);
}

/// Fixed-size arena of object records.
#[derive(Debug)]
pub struct ObjectTable<B = ()> {
    records: Vec<ObjectRecord<B>>,
}

impl ObjectTable<()> {
    /// Builds `count` objects with random parameters.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self::from_params((0..count).map(|_| ObjectParams::random(rng)))
    }

    /// Builds a table from explicit parameters, in order.
    pub fn from_params(params: impl IntoIterator<Item = ObjectParams>) -> Self {
        let records = params
            .into_iter()
            .map(|params| ObjectRecord {
                uniform: params.initial_uniform(),
                params,
                bindings: (),
            })
            .collect();

        Self { records }
    }
}

impl<B> ObjectTable<B> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectRecord<B>> {
        self.records.iter()
    }

    /// Attaches new bindings to every record, keeping parameters and staged uniforms.
    ///
    /// `bind` receives the record index and the record itself.
    pub fn map_bindings<C>(self, mut bind: impl FnMut(usize, &ObjectRecord<B>) -> C) -> ObjectTable<C> {
        let records = self
            .records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let bindings = bind(i, &record);
                ObjectRecord {
                    params: record.params,
                    uniform: record.uniform,
                    bindings,
                }
            })
            .collect();

        ObjectTable { records }
    }

    /// Emits one frame's worth of per-object commands for a surface of the
    /// given aspect ratio.
    ///
    /// Each record's scale fields are recomputed and staged before its uniform
    /// is written and its triangle drawn.
    pub fn record_frame<S>(&mut self, aspect: f32, sink: &mut S)
    where
        S: ObjectSink<B> + ?Sized,
    {
        for record in &mut self.records {
            record.uniform.scale = record.params.scale_for_aspect(aspect);
            sink.write_uniform(&record.bindings, &record.uniform);
            sink.draw(&record.bindings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Write(usize, ObjectUniform),
        Draw(usize),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Recorder {
        fn writes(&self) -> Vec<[f32; 2]> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Write(_, u) => Some(u.scale),
                    Cmd::Draw(_) => None,
                })
                .collect()
        }
    }

    impl ObjectSink<usize> for Recorder {
        fn write_uniform(&mut self, bindings: &usize, uniform: &ObjectUniform) {
            self.cmds.push(Cmd::Write(*bindings, *uniform));
        }

        fn draw(&mut self, bindings: &usize) {
            self.cmds.push(Cmd::Draw(*bindings));
        }
    }

    fn params(scale: f32) -> ObjectParams {
        ObjectParams {
            scale,
            color: Color::rgb(0.5, 0.25, 1.0),
            offset: [0.1, -0.2],
        }
    }

    fn indexed(table: ObjectTable) -> ObjectTable<usize> {
        table.map_bindings(|i, _| i)
    }

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-6 && (a[1] - b[1]).abs() < 1e-6
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn uniform_is_eight_floats() {
        assert_eq!(ObjectUniform::SIZE, 32);
        let u = ObjectUniform {
            color: [1.0, 2.0, 3.0, 4.0],
            scale: [5.0, 6.0],
            offset: [7.0, 8.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn random_objects_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = ObjectTable::random(OBJECT_COUNT, &mut rng);
        assert_eq!(table.len(), OBJECT_COUNT);

        for record in table.iter() {
            let p = record.params();
            assert!(SCALE_RANGE.contains(&p.scale), "scale {}", p.scale);
            for c in [p.color.r, p.color.g, p.color.b] {
                assert!((0.0..=1.0).contains(&c), "color {c}");
            }
            assert_eq!(p.color.a, 1.0);
            for o in p.offset {
                assert!(OFFSET_RANGE.contains(&o), "offset {o}");
            }
        }
    }

    #[test]
    fn staged_uniform_mirrors_params() {
        let table = ObjectTable::from_params([params(0.4)]);
        let record = table.iter().next().unwrap();
        assert_eq!(record.uniform().color, [0.5, 0.25, 1.0, 1.0]);
        assert_eq!(record.uniform().offset, [0.1, -0.2]);
        assert_eq!(record.uniform().scale, [0.4, 0.4]);
    }

    #[test]
    fn same_seed_same_table() {
        let a = ObjectTable::random(5, &mut StdRng::seed_from_u64(42));
        let b = ObjectTable::random(5, &mut StdRng::seed_from_u64(42));
        let pa: Vec<_> = a.iter().map(|r| *r.params()).collect();
        let pb: Vec<_> = b.iter().map(|r| *r.params()).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn map_bindings_keeps_order_and_params() {
        let table = indexed(ObjectTable::from_params([params(0.2), params(0.3)]));
        let got: Vec<_> = table
            .iter()
            .map(|r| (*r.bindings(), r.params().scale))
            .collect();
        assert_eq!(got, vec![(0, 0.2), (1, 0.3)]);
    }

    // ── frame recording ───────────────────────────────────────────────────

    #[test]
    fn each_draw_follows_its_own_write() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut table = indexed(ObjectTable::random(OBJECT_COUNT, &mut rng));
        let mut rec = Recorder::default();
        table.record_frame(1.5, &mut rec);

        assert_eq!(rec.cmds.len(), OBJECT_COUNT * 2);
        for (i, pair) in rec.cmds.chunks(2).enumerate() {
            match pair {
                [Cmd::Write(w, _), Cmd::Draw(d)] => {
                    assert_eq!(*w, i);
                    assert_eq!(*d, i);
                }
                other => panic!("unexpected command pair {other:?}"),
            }
        }
    }

    #[test]
    fn scale_writes_follow_aspect() {
        let mut table = indexed(ObjectTable::from_params([
            params(0.2),
            params(0.35),
            params(0.5),
        ]));
        let mut rec = Recorder::default();
        table.record_frame(200.0 / 100.0, &mut rec);

        let expected = [[0.1, 0.2], [0.175, 0.35], [0.25, 0.5]];
        let writes = rec.writes();
        assert_eq!(writes.len(), expected.len());
        for (got, want) in writes.iter().zip(expected) {
            assert!(approx(*got, want), "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn wider_surface_shrinks_x_scale() {
        let mut table = indexed(ObjectTable::from_params([params(0.3), params(0.45)]));

        let mut square = Recorder::default();
        table.record_frame(100.0 / 100.0, &mut square);
        let mut wide = Recorder::default();
        table.record_frame(300.0 / 100.0, &mut wide);

        for (a, b) in square.writes().iter().zip(wide.writes()) {
            assert!((b[0] - a[0] / 3.0).abs() < 1e-6);
            assert_eq!(a[1], b[1]);
        }
    }

    #[test]
    fn repeated_frames_write_identical_uniforms() {
        let mut table = indexed(ObjectTable::random(10, &mut StdRng::seed_from_u64(3)));
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        table.record_frame(1.25, &mut first);
        table.record_frame(1.25, &mut second);
        assert_eq!(first.cmds, second.cmds);
    }

    #[test]
    fn staging_keeps_last_frame_scale() {
        let mut table = indexed(ObjectTable::from_params([params(0.4)]));
        table.record_frame(2.0, &mut Recorder::default());
        let record = table.iter().next().unwrap();
        assert!(approx(record.uniform().scale, [0.2, 0.4]));
    }
}
