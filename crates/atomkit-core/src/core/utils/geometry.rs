use crate::core::chem::motion::InternalMotionType;
use crate::core::error::ChemError;
use crate::core::models::atom::Atom;
use nalgebra::Vector3;

/// Returns the atom's XYZ as a vector from the origin.
#[inline]
pub fn vector_for(atom: &Atom) -> Vector3<f64> {
    atom.position.coords
}

/// Euclidean distance between two atoms in Angstroms.
pub fn distance(first: &Atom, second: &Atom) -> f64 {
    (vector_for(first) - vector_for(second)).norm()
}

/// Converts spherical angles in degrees to a unit direction vector.
///
/// `phi` is the azimuth in the XY plane, measured from +X; `theta` is the
/// polar angle, measured from +Z.
pub fn phi_theta_to_vector(phi: f64, theta: f64) -> Vector3<f64> {
    let phi_rad = phi.to_radians();
    let theta_rad = theta.to_radians();
    Vector3::new(
        phi_rad.cos() * theta_rad.sin(),
        phi_rad.sin() * theta_rad.sin(),
        theta_rad.cos(),
    )
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so nearly parallel vectors
/// cannot produce NaN through rounding.
///
/// # Errors
///
/// Returns [`ChemError::InvalidArgument`] if either vector has zero length.
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Result<f64, ChemError> {
    let norm_product = v1.norm() * v2.norm();
    if norm_product == 0.0 {
        return Err(ChemError::InvalidArgument(
            "cannot compute an angle involving a zero-length vector".to_string(),
        ));
    }
    let cos = (v1.dot(v2) / norm_product).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Bond angle `a1-a2-a3` in degrees, with `a2` at the vertex.
pub fn bond_angle(a1: &Atom, a2: &Atom, a3: &Atom) -> Result<f64, ChemError> {
    let v21 = vector_for(a1) - vector_for(a2);
    let v23 = vector_for(a3) - vector_for(a2);
    angle_between(&v21, &v23).map(f64::to_degrees)
}

/// Dihedral angle between the planes `a1-a2-a3` and `a2-a3-a4`, in degrees
/// within `(-180, 180]`.
///
/// The plane normals are taken at the pivots `a2` and `a3`. The angle is
/// negative when the first normal points away from `a4`'s position vector.
///
/// # Errors
///
/// Returns [`ChemError::InvalidArgument`] if either triple is collinear, since
/// its plane is then undefined.
pub fn dihedral_angle(a1: &Atom, a2: &Atom, a3: &Atom, a4: &Atom) -> Result<f64, ChemError> {
    let v21 = vector_for(a1) - vector_for(a2);
    let v23 = vector_for(a3) - vector_for(a2);
    let n1 = v21.cross(&v23);

    let v32 = vector_for(a2) - vector_for(a3);
    let v34 = vector_for(a4) - vector_for(a3);
    let n2 = v32.cross(&v34);

    let angle = angle_between(&n1, &n2)
        .map_err(|_| {
            ChemError::InvalidArgument(format!(
                "atoms {}, {}, {}, {} do not define two planes",
                a1.id, a2.id, a3.id, a4.id
            ))
        })?
        .to_degrees();

    if n1.dot(&vector_for(a4)) < 0.0 && angle > 0.0 && angle < 180.0 {
        Ok(-angle)
    } else {
        Ok(angle)
    }
}

/// Centers `atom` on `origin` by subtracting its first three values.
///
/// # Errors
///
/// Returns [`ChemError::InvalidArgument`] if `origin` has fewer than three values.
pub fn center(atom: &mut Atom, origin: &[f64]) -> Result<(), ChemError> {
    atom.center(origin)
}

/// Measures the internal coordinate of type `motion` over `atoms`: a distance in
/// Angstroms, a bond angle in degrees, or a dihedral angle in degrees.
///
/// # Errors
///
/// Returns [`ChemError::InvalidArgument`] if the number of atoms does not match
/// [`InternalMotionType::atoms_required`], or if an angle is undefined.
pub fn measure(motion: InternalMotionType, atoms: &[&Atom]) -> Result<f64, ChemError> {
    match (motion, atoms) {
        (InternalMotionType::BondStretching, [a1, a2]) => Ok(distance(a1, a2)),
        (InternalMotionType::AngleBending, [a1, a2, a3]) => bond_angle(a1, a2, a3),
        (InternalMotionType::DihedralRotation, [a1, a2, a3, a4]) => {
            dihedral_angle(a1, a2, a3, a4)
        }
        _ => Err(ChemError::InvalidArgument(format!(
            "{:?} needs {} atoms, got {}",
            motion,
            motion.atoms_required(),
            atoms.len()
        ))),
    }
}
