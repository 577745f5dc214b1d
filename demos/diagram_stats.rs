use diagramx::{build_diagram, point, DiagramComponent, EndForces, FrameModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two-span beam along X, split at the middle support
    let mut model = FrameModel::new();
    let left = model.add_joint(point(0.0, 0.0, 0.0));
    let middle = model.add_joint(point(2.0, 0.0, 0.0));
    let right = model.add_joint(point(4.0, 0.0, 0.0));
    let first = model.add_member(left, middle);
    let second = model.add_member(middle, right);

    // Solved end shears in newtons; both spans cross zero
    model.set_end_forces(
        first,
        EndForces {
            shear_z: 12.0e3,
            ..EndForces::default()
        },
        EndForces {
            shear_z: 4.0e3,
            ..EndForces::default()
        },
    )?;
    model.set_end_forces(
        second,
        EndForces {
            shear_z: 4.0e3,
            ..EndForces::default()
        },
        EndForces {
            shear_z: 12.0e3,
            ..EndForces::default()
        },
    )?;

    // Utilisation ratios from a design check, one pair per member
    model.set_member_property(first, "utilisation", 0.55, 0.81)?;
    model.set_member_property(second, "utilisation", 0.81, 0.47)?;

    // Shear diagram in kilonewtons
    let shear = build_diagram([model.members()], DiagramComponent::ShearZ, 0.1, 1.0e-3)?;
    println!(
        "Vz: {} cells spanning {:.1} kN to {:.1} kN",
        shear.cell_count(),
        shear.range.min(),
        shear.range.max()
    );

    // Utilisation ribbon straight off the named field, ready for a viewer
    let utilisation = build_diagram(
        [model.members()],
        DiagramComponent::Property("utilisation".to_string()),
        1.0,
        1.0,
    )?;
    println!("{}", serde_json::to_string_pretty(&utilisation)?);

    Ok(())
}
