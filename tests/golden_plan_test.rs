use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_coach_rs::catalog::load_catalog;
use diet_coach_rs::models::{MealPlanRequest, MealSlot, NutrientTargets};
use diet_coach_rs::planner::MealPlanner;

// Seed 42, veg + budget, 2 days, daily targets 2000 kcal / 150 P / 67 F / 200 C.
// Each entry: (name, grams, [kcal, protein, fat, carbs]).
const EXPECTED_MEALS: [[&[(&str, f64, [f64; 4])]; 3]; 2] = [
    [
        // Breakfast
        &[
            ("Organic Tempeh", 138.5, [263.2, 28.1, 15.0, 10.5]),
            ("Organic Chia Seeds", 93.8, [455.6, 15.5, 28.8, 39.5]),
            ("Rainbow Bell Peppers", 53.0, [16.4, 0.5, 0.2, 3.9]),
        ],
        // Lunch
        &[
            ("Aged Cheddar Cheese", 150.0, [604.5, 37.3, 49.7, 2.0]),
            ("Short Grain Brown Rice", 200.0, [222.0, 5.2, 1.8, 44.0]),
            ("Spiralized Zucchini (zoodles)", 68.0, [11.6, 0.8, 0.2, 2.1]),
        ],
        // Dinner
        &[
            ("Organic Chia Seeds", 150.0, [729.0, 24.8, 46.1, 63.2]),
            ("Roasted Chickpeas", 61.5, [100.9, 5.5, 1.6, 16.8]),
            ("Roasted Cauliflower", 50.0, [12.5, 1.0, 0.2, 2.5]),
        ],
    ],
    [
        // Breakfast
        &[
            ("Organic Chia Seeds", 150.0, [729.0, 24.8, 46.1, 63.2]),
            ("Extra Virgin Olive Oil", 110.0, [972.4, 0.0, 110.0, 0.0]),
        ],
        // Lunch
        &[
            ("Low-Fat Cottage Cheese", 150.0, [108.0, 18.6, 1.5, 4.1]),
            ("Organic Chia Seeds", 156.7, [761.3, 25.8, 48.1, 66.0]),
            ("Organic Broccoli (steamed)", 121.0, [42.4, 3.4, 0.5, 8.5]),
        ],
        // Dinner
        &[
            ("Organic Tempeh", 150.0, [285.0, 30.5, 16.2, 11.4]),
            ("Organic Chia Seeds", 162.9, [791.9, 26.9, 50.0, 68.6]),
            ("Curly Kale (fresh)", 114.0, [39.9, 3.3, 0.5, 10.0]),
        ],
    ],
];

const EXPECTED_MEAL_TOTALS: [[[f64; 4]; 3]; 2] = [
    [[735.2, 44.1, 44.0, 53.9], [838.1, 43.3, 51.7, 48.1], [842.4, 31.3, 47.9, 82.5]],
    [[1701.4, 24.8, 156.1, 63.2], [911.7, 47.8, 50.1, 78.6], [1116.8, 60.7, 66.7, 90.0]],
];

const EXPECTED_DAY_TOTALS: [[f64; 4]; 2] = [
    [2415.7, 118.7, 143.6, 184.5],
    [3729.9, 133.3, 272.9, 231.8],
];

const EXPECTED_PLAN_TOTALS: [f64; 5] = [6145.6, 252.0, 416.5, 416.3, 3072.8];
const EXPECTED_ADHERENCE: f64 = 0.289;

fn recorded_plan() -> diet_coach_rs::Plan {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("foods.json");
    let catalog = load_catalog(Some(&path)).unwrap();
    let request = MealPlanRequest::new(
        NutrientTargets::new(2000.0, 150.0, 67.0, 200.0),
        ["veg", "budget"].into_iter().collect(),
        2,
    );
    let mut rng = StdRng::seed_from_u64(42);
    MealPlanner::new(&catalog).generate_plan(&request, &mut rng).unwrap()
}

#[test]
fn test_seeded_plan_matches_recorded_meals() {
    let plan = recorded_plan();
    assert_eq!(plan.days.len(), EXPECTED_MEALS.len());

    for (d, day) in plan.days.iter().enumerate() {
        assert_eq!(day.day, d as u32 + 1);
        assert_eq!(day.meals.len(), 3);

        for (m, meal) in day.meals.iter().enumerate() {
            assert_eq!(meal.name, MealSlot::ALL[m]);

            let actual: Vec<(&str, f64, [f64; 4])> = meal
                .foods
                .iter()
                .map(|e| (e.name.as_str(), e.amount_g, [e.calories, e.protein, e.fat, e.carbs]))
                .collect();
            assert_eq!(actual, EXPECTED_MEALS[d][m], "day {} {}", day.day, meal.name);

            let t = &meal.totals;
            assert_eq!([t.calories, t.protein, t.fat, t.carbs], EXPECTED_MEAL_TOTALS[d][m]);
        }

        let t = &day.daily_totals;
        assert_eq!([t.calories, t.protein, t.fat, t.carbs], EXPECTED_DAY_TOTALS[d]);
    }
}

#[test]
fn test_seeded_plan_matches_recorded_totals() {
    let plan = recorded_plan();
    let t = &plan.plan_totals;
    assert_eq!(
        [t.calories, t.protein, t.fat, t.carbs, t.avg_daily_calories],
        EXPECTED_PLAN_TOTALS
    );
    assert_eq!(plan.adherence_score, EXPECTED_ADHERENCE);
}
