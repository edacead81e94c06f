use drydown_core::documentation;
use drydown_core::error::DrydownError;
use drydown_core::materials;
use drydown_core::model::{Category, Class, ContainmentLevel, DocumentationPhase};
use drydown_core::tables::builtin;
use drydown_core::tables::schema::DryingStandardDef;

pub fn categories() -> Result<(), DrydownError> {
    println!("Water damage categories (contamination level):\n");

    for cat in Category::ALL {
        let def = builtin::water_category(cat);
        println!("  {} - {}", cat, def.name);
        println!("    {}", def.description);
        println!("    Health risk: {:?}", def.health_risk);
        println!("    PPE: {}", def.ppe_required.join(", "));
        println!("    Escalation: {}", def.time_based_escalation);
        println!();
    }

    Ok(())
}

pub fn classes() -> Result<(), DrydownError> {
    println!("Water damage classes (evaporation/absorption load):\n");

    for class in Class::ALL {
        let def = builtin::water_class(class);
        println!("  {} - {}", class, def.name);
        println!("    Affected area: {}", def.affected_area);
        println!("    Air movers: {}", def.equipment_guidelines.air_movers_per_sq_ft);
        println!(
            "    Dehumidification: {}",
            def.equipment_guidelines.dehumidification_factor
        );
        println!();
    }

    println!("Class 4 requires specialty drying; standard sizing formulas do not apply.");

    Ok(())
}

pub fn containment() -> Result<(), DrydownError> {
    println!("Mold remediation containment levels:\n");

    for level in ContainmentLevel::ALL {
        let def = builtin::containment_level(level);
        println!("  {}", def.name);
        println!("    Affected area: {}", def.affected_area);
        println!("    Oversight: {}", def.oversight_required);
        println!("    PPE:");
        for item in &def.ppe_requirements {
            println!("      - {}", item);
        }
        println!();
    }

    Ok(())
}

pub fn standards(material: Option<&str>) -> Result<(), DrydownError> {
    match material {
        Some(name) => {
            let standard = materials::drying_standard(name)
                .ok_or_else(|| DrydownError::UnknownMaterial(name.to_string()))?;
            print_standard(standard);
        }
        None => {
            let table = builtin::drying_standards();
            println!("{} (v{}):\n", table.name, table.version);
            for standard in &table.standards {
                print_standard(standard);
            }
        }
    }

    Ok(())
}

fn print_standard(standard: &DryingStandardDef) {
    println!("  {}", standard.material);
    println!("    Target: {}", standard.target_moisture_content);
    println!("    Max acceptable: {}", standard.max_acceptable);
    println!("    Measurement: {}", standard.measurement_method);
    for note in &standard.notes {
        println!("      - {}", note);
    }
    println!();
}

pub fn docs(phase: Option<&str>) -> Result<(), DrydownError> {
    let phases: Vec<DocumentationPhase> = match phase {
        Some(name) => {
            let parsed = DocumentationPhase::from_str_loose(name)
                .ok_or_else(|| DrydownError::UnknownPhase(name.to_string()))?;
            vec![parsed]
        }
        None => DocumentationPhase::ALL.to_vec(),
    };

    for phase in phases {
        let req = documentation::documentation_requirements(phase);
        println!("{}", req.title);
        println!("  Frequency: {}", req.frequency);
        for item in &req.items {
            println!("  [ ] {}", item);
        }
        println!();
    }

    Ok(())
}

pub fn steps() -> Result<(), DrydownError> {
    println!("Mold remediation procedure:\n");

    for step in documentation::remediation_steps() {
        println!("  Step {}: {}", step.step_number, step.phase);
        println!("    {}", step.description);
        for procedure in &step.procedures {
            println!("      - {}", procedure);
        }
        if !step.common_mistakes.is_empty() {
            println!("    Common mistakes:");
            for mistake in &step.common_mistakes {
                println!("      ! {}", mistake);
            }
        }
        println!();
    }

    Ok(())
}
