// Mesh data, OBJ parsing, and the procedural placeholder shapes used when
// an optional model asset fails to resolve.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use glam::Vec3;

/// Interleaved vertex record uploaded verbatim to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// A model asset resolved exactly once per path: either the fetched OBJ or
/// a deterministic placeholder. Consumers render either variant the same
/// way; `Fallback` is a designed state, not an error.
pub enum ModelAsset {
    Loaded(MeshData),
    Fallback(MeshData),
}

impl ModelAsset {
    pub fn mesh(&self) -> &MeshData {
        match self {
            ModelAsset::Loaded(m) | ModelAsset::Fallback(m) => m,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelAsset::Fallback(_))
    }
}

// ---------------- OBJ parsing ----------------

// One face corner: 1-based (possibly negative) position ref plus an
// optional normal ref. Texture coordinates are ignored.
#[derive(Clone, Copy)]
struct Corner {
    position: i32,
    normal: Option<i32>,
}

/// Parse an OBJ document into an indexed mesh.
///
/// Supports `v`, `vn`, and `f` records, fan-triangulates polygons, accepts
/// negative (relative) indices, and computes smooth normals when the file
/// does not supply them. Unknown records are skipped.
pub fn parse_obj(text: &str) -> Result<MeshData> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<[Corner; 3]> = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => positions.push(
                read_vec3(&mut fields)
                    .with_context(|| format!("bad vertex on line {}", line_no + 1))?,
            ),
            Some("vn") => normals.push(
                read_vec3(&mut fields)
                    .with_context(|| format!("bad normal on line {}", line_no + 1))?,
            ),
            Some("f") => {
                let corners: Vec<Corner> = fields
                    .map(read_corner)
                    .collect::<Result<_>>()
                    .with_context(|| format!("bad face on line {}", line_no + 1))?;
                if corners.len() < 3 {
                    bail!("face on line {} has fewer than 3 corners", line_no + 1);
                }
                for i in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            _ => {}
        }
    }

    if positions.is_empty() || triangles.is_empty() {
        bail!("OBJ defines no renderable geometry");
    }

    let mut mesh = index_triangles(&positions, &normals, &triangles)?;
    if mesh
        .vertices
        .iter()
        .any(|v| v.normal == [0.0, 0.0, 0.0])
    {
        compute_smooth_normals(&mut mesh);
    }
    Ok(mesh)
}

fn read_vec3<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<Vec3> {
    let mut component = || -> Result<f32> {
        fields
            .next()
            .ok_or_else(|| anyhow!("missing component"))?
            .parse::<f32>()
            .map_err(|e| anyhow!("{e}"))
    };
    Ok(Vec3::new(component()?, component()?, component()?))
}

fn read_corner(field: &str) -> Result<Corner> {
    // Forms: "p", "p/t", "p//n", "p/t/n"
    let mut refs = field.split('/');
    let position = refs
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("missing position index"))?
        .parse::<i32>()?;
    let _texture = refs.next();
    let normal = match refs.next() {
        Some(s) if !s.is_empty() => Some(s.parse::<i32>()?),
        _ => None,
    };
    Ok(Corner { position, normal })
}

// Map a 1-based (or negative, counted from the end) OBJ reference to a
// zero-based index. Zero is invalid in OBJ.
fn resolve_ref(reference: i32, len: usize) -> Option<usize> {
    if reference > 0 {
        let idx = reference as usize - 1;
        (idx < len).then_some(idx)
    } else if reference < 0 {
        let back = reference.unsigned_abs() as usize;
        (back <= len).then(|| len - back)
    } else {
        None
    }
}

fn index_triangles(
    positions: &[Vec3],
    normals: &[Vec3],
    triangles: &[[Corner; 3]],
) -> Result<MeshData> {
    let mut seen: HashMap<(usize, Option<usize>), u32> = HashMap::new();
    let mut mesh = MeshData::default();

    for tri in triangles {
        for corner in tri {
            let pi = resolve_ref(corner.position, positions.len())
                .ok_or_else(|| anyhow!("face references missing vertex {}", corner.position))?;
            let ni = corner.normal.and_then(|n| resolve_ref(n, normals.len()));
            let index = *seen.entry((pi, ni)).or_insert_with(|| {
                mesh.vertices.push(Vertex {
                    position: positions[pi].to_array(),
                    normal: ni.map(|n| normals[n]).unwrap_or(Vec3::ZERO).to_array(),
                });
                (mesh.vertices.len() - 1) as u32
            });
            mesh.indices.push(index);
        }
    }
    Ok(mesh)
}

// Area-weighted vertex normals from triangle geometry.
fn compute_smooth_normals(mesh: &mut MeshData) {
    let mut accum = vec![Vec3::ZERO; mesh.vertices.len()];
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from_array(mesh.vertices[a].position);
        let pb = Vec3::from_array(mesh.vertices[b].position);
        let pc = Vec3::from_array(mesh.vertices[c].position);
        let face = (pb - pa).cross(pc - pa);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }
    for (vertex, normal) in mesh.vertices.iter_mut().zip(accum) {
        vertex.normal = normal.normalize_or_zero().to_array();
    }
}

// ---------------- Procedural placeholders ----------------

// Axis-aligned box with flat face normals, appended to `mesh`.
fn push_box(mesh: &mut MeshData, center: Vec3, half: Vec3) {
    // (normal, two in-plane axes)
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    for (n, u, v) in FACES {
        let normal = Vec3::from_array(n);
        let u = Vec3::from_array(u) * half;
        let v = Vec3::from_array(v) * half;
        let origin = center + normal * half;
        let base = mesh.vertices.len() as u32;
        for corner in [-u - v, u - v, u + v, -u + v] {
            mesh.vertices.push(Vertex {
                position: (origin + corner).to_array(),
                normal: normal.to_array(),
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Boxy crow silhouette: body, head, beak, tail. Authored with its base on
/// y = 0 so it can be dropped onto the tub floor.
pub fn placeholder_crow() -> MeshData {
    let mut mesh = MeshData::default();
    push_box(&mut mesh, Vec3::new(0.0, 0.55, 0.0), Vec3::new(0.55, 0.32, 0.28)); // body
    push_box(&mut mesh, Vec3::new(0.48, 1.0, 0.0), Vec3::new(0.22, 0.2, 0.18)); // head
    push_box(&mut mesh, Vec3::new(0.78, 0.98, 0.0), Vec3::new(0.12, 0.05, 0.05)); // beak
    push_box(&mut mesh, Vec3::new(-0.62, 0.72, 0.0), Vec3::new(0.22, 0.07, 0.14)); // tail
    mesh
}

/// Open-box bathtub: a floor panel and four walls, no boolean carving.
pub fn placeholder_bathtub() -> MeshData {
    let mut mesh = MeshData::default();
    push_box(&mut mesh, Vec3::new(0.0, 0.2, 0.0), Vec3::new(2.4, 0.15, 1.6)); // bottom
    push_box(&mut mesh, Vec3::new(-2.25, 0.8, 0.0), Vec3::new(0.15, 0.55, 1.6)); // left wall
    push_box(&mut mesh, Vec3::new(2.25, 0.8, 0.0), Vec3::new(0.15, 0.55, 1.6)); // right wall
    push_box(&mut mesh, Vec3::new(0.0, 0.8, -1.45), Vec3::new(2.4, 0.55, 0.15)); // far wall
    push_box(&mut mesh, Vec3::new(0.0, 0.8, 1.45), Vec3::new(2.4, 0.55, 0.15)); // near wall
    mesh
}

/// The sponge is always procedural; there is no asset for it.
pub fn sponge_mesh() -> MeshData {
    let mut mesh = MeshData::default();
    push_box(&mut mesh, Vec3::ZERO, Vec3::new(0.32, 0.18, 0.22));
    mesh
}

/// Single upward-facing quad under the tub.
pub fn floor_mesh(extent: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let up = [0.0, 1.0, 0.0];
    for (x, z) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        mesh.vertices.push(Vertex {
            position: [x * extent, 0.0, z * extent],
            normal: up,
        });
    }
    mesh.indices.extend_from_slice(&[0, 2, 1, 0, 3, 2]);
    mesh
}
