use diagramx::{point, Cell, DiagramBuilder, DiagramComponent, EndForces, FrameModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Portal frame in the X-Z plane: two columns and a beam
    let mut model = FrameModel::new();
    let base_left = model.add_joint(point(0.0, 0.0, 0.0));
    let top_left = model.add_joint(point(0.0, 0.0, 3.0));
    let top_right = model.add_joint(point(6.0, 0.0, 3.0));
    let base_right = model.add_joint(point(6.0, 0.0, 0.0));

    let left_column = model.add_member(base_left, top_left);
    let beam = model.add_member(top_left, top_right);
    let right_column = model.add_member(base_right, top_right);

    // Solved end moments about local y, in newton-metres
    model.set_end_forces(
        left_column,
        EndForces {
            moment_y: 4.0e3,
            ..EndForces::default()
        },
        EndForces {
            moment_y: 2.0e3,
            ..EndForces::default()
        },
    )?;
    model.set_end_forces(
        beam,
        EndForces {
            moment_y: 5.0e3,
            ..EndForces::default()
        },
        EndForces {
            moment_y: -3.0e3,
            ..EndForces::default()
        },
    )?;
    model.set_end_forces(
        right_column,
        EndForces {
            moment_y: -2.0e3,
            ..EndForces::default()
        },
        EndForces {
            moment_y: -1.0e3,
            ..EndForces::default()
        },
    )?;

    // Assemble the bending moment diagram in kilonewton-metres
    let mut builder = DiagramBuilder::new(DiagramComponent::BendingY, 0.05, 1.0e-3);
    builder.append_set(model.members())?;
    let diagram = builder.finish();

    println!(
        "My diagram: {} vertices in {} cells",
        diagram.point_count(),
        diagram.cell_count()
    );
    println!(
        "moment range: {:.1} kNm to {:.1} kNm",
        diagram.range.min(),
        diagram.range.max()
    );
    for cell in &diagram.cells {
        match cell {
            Cell::Quad(indices) => println!("  quad {indices:?}"),
            Cell::Triangle(indices) => println!("  triangle {indices:?}"),
        }
    }

    Ok(())
}
