use crate::models::{DietOption, EnergyReport, FoodCatalogItem, MealPlanRequest, Plan};

/// Display computed energy targets.
pub fn display_targets(report: &EnergyReport) {
    let report = report.rounded();
    let t = &report.targets;
    let pct = t.macro_percentages();

    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("BMR:             {:>7.1} kcal", report.bmr);
    println!("Activity factor: {:>7.3}", report.activity_factor);
    println!("TDEE:            {:>7.1} kcal", report.tdee);
    println!("Target calories: {:>7.1} kcal", t.target_calories);
    println!();
    println!(
        "Protein {:>6.1} g ({:.0}%) | Fat {:>6.1} g ({:.0}%) | Carbs {:>6.1} g ({:.0}%)",
        t.protein_g,
        pct.protein,
        t.fat_g,
        pct.fat,
        t.carbs_g,
        pct.carbs,
    );
    println!();
}

/// Display a generated plan day by day, followed by totals.
pub fn display_plan(plan: &Plan, request: &MealPlanRequest) {
    println!();
    println!("=== Meal Plan ({} days) ===", plan.days.len());
    if !request.diet_tags.is_empty() {
        println!("Restrictions: {}", request.diet_tags.joined());
    }

    let name_width = plan.entries().map(|e| e.name.len()).max().unwrap_or(10);

    for day in &plan.days {
        println!();
        println!("--- Day {} ---", day.day);

        for meal in &day.meals {
            println!("{}:", meal.name);
            if meal.foods.is_empty() {
                println!("  (no suitable foods)");
            }
            for entry in &meal.foods {
                println!(
                    "  {:<width$} {:>6.1} g  {:>6.1} kcal  P {:>5.1}  F {:>5.1}  C {:>5.1}",
                    entry.name,
                    entry.amount_g,
                    entry.calories,
                    entry.protein,
                    entry.fat,
                    entry.carbs,
                    width = name_width
                );
            }
            let m = &meal.totals;
            println!(
                "  {:<width$}          {:>6.1} kcal  P {:>5.1}  F {:>5.1}  C {:>5.1}",
                "total",
                m.calories,
                m.protein,
                m.fat,
                m.carbs,
                width = name_width
            );
        }

        let d = &day.daily_totals;
        println!(
            "Day total: {:.1} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
            d.calories, d.protein, d.fat, d.carbs
        );
    }

    let totals = &plan.plan_totals;
    let t = &request.targets;

    println!();
    println!("--- Summary ---");
    println!(
        "Plan total: {:.1} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
        totals.calories, totals.protein, totals.fat, totals.carbs
    );
    println!(
        "Average per day: {:.1} kcal (target {:.1})",
        totals.avg_daily_calories, t.target_calories
    );
    println!("Adherence score: {:.3}", plan.adherence_score);
    println!();
}

/// Display the supported dietary restrictions.
pub fn display_diet_options(options: &[DietOption]) {
    println!();
    println!("=== Dietary Restrictions ===");
    println!();
    for option in options {
        println!("  {:<13} {} - {}", option.value, option.label, option.description);
        println!("  {:<13} e.g. {}", "", option.examples.join(", "));
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodCatalogItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let name_width = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        let tags: Vec<&str> = food.tags.iter().map(String::as_str).collect();
        println!(
            "  {:<width$} {:>5.0} kcal  P {:>4.1}  F {:>4.1}  C {:>4.1}  [{}] {}",
            food.name,
            food.per_100g.calories,
            food.per_100g.protein,
            food.per_100g.fat,
            food.per_100g.carbs,
            food.cost_level,
            tags.join(", "),
            width = name_width
        );
    }

    println!();
}
