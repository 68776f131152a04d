//! STL import and export for both ASCII and binary flavors.

use nom::{
    IResult,
    bytes::complete::{tag, take_till},
    character::complete::{multispace0, multispace1},
    multi::many0,
    number::complete::double,
    sequence::preceded,
};

use super::IoError;
use crate::float_types::Real;
use crate::mesh::{Facet, Mesh};
use crate::point::Point3D;
use crate::vector::Vector3D;

/// Read and parse an STL file from disk, detecting the flavor.
pub fn load_stl(path: impl AsRef<std::path::Path>) -> Result<Mesh, IoError> {
    let data = std::fs::read(path)?;
    parse_stl(&data)
}

/// Parse STL bytes, detecting ASCII vs binary. Files that begin with
/// `solid` but fail the ASCII grammar fall through to the binary decoder,
/// since binary headers may legally start with the same word.
pub fn parse_stl(data: &[u8]) -> Result<Mesh, IoError> {
    if data.len() > 5 && &data[..5] == b"solid" {
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(mesh) = parse_stl_ascii(text) {
                return Ok(mesh);
            }
        }
    }
    parse_stl_binary(data)
}

/// Parse an ASCII STL document into a mesh.
pub fn parse_stl_ascii(input: &str) -> Result<Mesh, IoError> {
    match solid(input) {
        Ok((_, facets)) => {
            log::debug!("parsed {} facets from ascii stl", facets.len());
            Ok(Mesh::from_facets(facets))
        },
        Err(e) => Err(IoError::MalformedInput(format!("ascii stl: {e:?}"))),
    }
}

fn solid(input: &str) -> IResult<&str, Vec<Facet>> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    // The solid name is optional free text to the end of the line.
    let (input, _) = take_till(|c| c == '\n')(input)?;
    let (input, facets) = many0(facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;
    Ok((input, facets))
}

fn facet(input: &str) -> IResult<&str, Facet> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, (nx, ny, nz)) = triple(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v1) = vertex(input)?;
    let (input, v2) = vertex(input)?;
    let (input, v3) = vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;
    Ok((input, Facet::from_parts(Vector3D::new(nx, ny, nz), [v1, v2, v3])))
}

fn vertex(input: &str) -> IResult<&str, Point3D> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    let (input, (x, y, z)) = triple(input)?;
    Ok((input, Point3D::new(x, y, z)))
}

#[allow(clippy::unnecessary_cast)]
fn triple(input: &str) -> IResult<&str, (Real, Real, Real)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = double(input)?;
    Ok((input, (x as Real, y as Real, z as Real)))
}

/// Parse a binary STL buffer: an 80-byte header, a little-endian triangle
/// count, then 50-byte records of one normal, three vertices and an
/// attribute count.
#[allow(clippy::unnecessary_cast)]
pub fn parse_stl_binary(data: &[u8]) -> Result<Mesh, IoError> {
    if data.len() < 84 {
        return Err(IoError::MalformedInput("file too small to be a valid stl".to_string()));
    }

    let count = u32::from_le_bytes([data[80], data[81], data[82], data[83]]) as usize;

    let mut facets = Vec::with_capacity(count);
    let mut offset = 84;
    for _ in 0..count {
        if offset + 50 > data.len() {
            return Err(IoError::MalformedInput("unexpected end of stl record".to_string()));
        }

        let mut floats = [0.0 as Real; 12];
        for (i, slot) in floats.iter_mut().enumerate() {
            let at = offset + i * 4;
            *slot =
                f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]) as Real;
        }
        // Skip the attribute byte count.
        offset += 50;

        facets.push(Facet::from_parts(
            Vector3D::new(floats[0], floats[1], floats[2]),
            [
                Point3D::new(floats[3], floats[4], floats[5]),
                Point3D::new(floats[6], floats[7], floats[8]),
                Point3D::new(floats[9], floats[10], floats[11]),
            ],
        ));
    }

    log::debug!("parsed {} facets from binary stl", facets.len());
    Ok(Mesh::from_facets(facets))
}

/// Render a mesh as an ASCII STL document with the given solid name.
pub fn to_stl_ascii(mesh: &Mesh, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for facet in mesh.facets() {
        let n = facet.normal();
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x(), n.y(), n.z()));
        out.push_str("    outer loop\n");
        for v in facet.vertices() {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", v.x(), v.y(), v.z()));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}
