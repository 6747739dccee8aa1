//! Built-in exercise catalog.
//!
//! Ids are assigned from table position (1-based), so entries must only ever
//! be appended.

use super::{Equipment, Exercise, Goal, Intensity};

use Equipment::{Bodyweight, Chair, Dumbbells, FullGym, Kettlebell, Wall};
use Goal::{Cardio, Core, FullBody, Hiit, Mobility, Strength};
use Intensity::{Easy, Hard, Medium};

type Row = (
    &'static str,
    Goal,
    Equipment,
    Intensity,
    &'static str,
    Option<&'static str>,
);

const TABLE: &[Row] = &[
    // ── Strength ─────────────────────────────────────────────────────
    ("Push-Ups", Strength, Bodyweight, Medium,
        "Push-Ups: chest to the floor, every rep counts",
        Some("Hands under shoulders, body in one straight line. Lower chest to the floor and press back up.")),
    ("Diamond Push-Ups", Strength, Bodyweight, Hard,
        "Diamond Push-Ups: triceps on fire",
        Some("Hands form diamond shape under chest. Targets triceps more than regular push-ups.")),
    ("Wide Grip Push-Ups", Strength, Bodyweight, Medium,
        "Wide Grip Push-Ups: build that chest",
        Some("Hands wider than shoulders. Targets chest more than regular push-ups.")),
    ("Pike Push-Ups", Strength, Bodyweight, Medium,
        "Pike Push-Ups: shoulders of steel",
        Some("Start in downward dog position, lower head toward hands, push back up.")),
    ("Reverse Lunges", Strength, Bodyweight, Easy,
        "Reverse Lunges: step back, drive up",
        Some("Step backward into lunge, lower back knee toward ground, return to start.")),
    ("Single Leg Glute Bridge", Strength, Bodyweight, Medium,
        "Single Leg Glute Bridges: one leg, all glute",
        Some("Bridge with one leg extended. Lift hips using single glute. Very challenging.")),
    ("Squat Pulses", Strength, Bodyweight, Medium,
        "Squat Pulses: stay low, feel the burn",
        Some("Hold bottom of squat, pulse up and down in small movements. Stay low.")),
    ("Lunge Pulses", Strength, Bodyweight, Medium,
        "Lunge Pulses: tiny reps, big burn",
        Some("Hold bottom of lunge, pulse up and down. Keep front knee over ankle.")),
    ("Archer Push-Ups", Strength, Bodyweight, Hard,
        "Archer Push-Ups: one side at a time",
        Some("Wide hand position, shift weight to one arm during push-up. Very advanced.")),
    ("Calf Raises", Strength, Bodyweight, Easy,
        "Calf Raises: up on your toes",
        Some("Rise up on toes, hold briefly, lower slowly. Can be done on step for more range.")),
    ("Wall Sit", Strength, Wall, Medium,
        "Wall Sit: the invisible chair",
        Some("Back flat against wall, thighs parallel to floor. Hold.")),
    ("Wall Handstand Hold", Strength, Wall, Hard,
        "Wall Handstand Hold: upside down and strong",
        Some("Kick up to handstand against wall, hold position. Keep arms straight and strong.")),
    ("Handstand Push-Ups", Strength, Wall, Hard,
        "Handstand Push-Ups: boss level",
        Some("Inverted push-up against wall. Lower head toward ground, press back up.")),
    ("Chair Dips", Strength, Chair, Medium,
        "Chair Dips: triceps, meet gravity",
        Some("Hands on chair edge behind you, bend elbows to lower hips, press back up.")),
    ("Step-Ups", Strength, Chair, Medium,
        "Step-Ups: climb that chair",
        Some("Step onto a sturdy chair, drive through the heel, step down with control.")),
    ("Decline Push-Ups", Strength, Chair, Hard,
        "Decline Push-Ups: feet up, chest works",
        Some("Feet elevated on bench or step. More challenging than regular push-ups.")),
    ("Dumbbell Row", Strength, Dumbbells, Medium,
        "Dumbbell Rows: pull it to your hip",
        Some("Bend over, pull dumbbell to hip, lower slowly. Keep back straight throughout.")),
    ("Goblet Squat", Strength, Dumbbells, Medium,
        "Goblet Squats: hold it close, sit deep",
        Some("Hold one dumbbell at chest, squat between the knees, stand tall.")),
    ("Dumbbell Shoulder Press", Strength, Dumbbells, Medium,
        "Shoulder Press: push to the sky",
        None),
    ("Dumbbell Romanian Deadlift", Strength, Dumbbells, Medium,
        "Romanian Deadlifts: hinge and squeeze",
        Some("Soft knees, hinge at hips, slide the weights down the thighs and stand back up.")),
    ("Dumbbell Floor Press", Strength, Dumbbells, Easy,
        "Floor Press: bench press, no bench",
        None),
    ("Kettlebell Deadlift", Strength, Kettlebell, Easy,
        "Kettlebell Deadlifts: lift with the hips",
        None),
    ("Kettlebell Halo", Strength, Kettlebell, Easy,
        "Kettlebell Halos: circle your head",
        Some("Hold the bell by the horns, circle it slowly around your head. Switch direction.")),
    ("Barbell Back Squat", Strength, FullGym, Hard,
        "Back Squats: the king of lifts",
        None),
    ("Lat Pulldown", Strength, FullGym, Medium,
        "Lat Pulldowns: wings incoming",
        None),
    ("Bench Press", Strength, FullGym, Hard,
        "Bench Press: press it like you mean it",
        None),
    // ── Cardio ───────────────────────────────────────────────────────
    ("Jumping Jacks", Cardio, Bodyweight, Easy,
        "Jumping Jacks: the classic",
        Some("Jump feet out while raising arms overhead, jump back in.")),
    ("High Knees", Cardio, Bodyweight, Medium,
        "High Knees: knees to the sky",
        Some("Run in place driving knees to hip height. Pump the arms.")),
    ("Butt Kicks", Cardio, Bodyweight, Easy,
        "Butt Kicks: heels to glutes",
        None),
    ("Skater Hops", Cardio, Bodyweight, Medium,
        "Skater Hops: glide side to side",
        Some("Leap sideways onto one foot, swing the other behind you. Alternate.")),
    ("Mountain Climbers", Cardio, Bodyweight, Medium,
        "Mountain Climbers: climb that mountain",
        Some("From plank, drive knees to chest one at a time. Keep hips low.")),
    ("Fast Feet", Cardio, Bodyweight, Medium,
        "Fast Feet: quick quick quick",
        None),
    ("Invisible Jump Rope", Cardio, Bodyweight, Easy,
        "Invisible Jump Rope: no rope, no excuse",
        None),
    ("Chair Step Sprints", Cardio, Chair, Hard,
        "Chair Step Sprints: up down up down",
        None),
    ("Kettlebell Swings", Cardio, Kettlebell, Hard,
        "Kettlebell Swings: snap those hips",
        Some("Hinge and hike the bell back, snap hips forward to float it to chest height.")),
    ("Dumbbell Thrusters", Cardio, Dumbbells, Hard,
        "Thrusters: squat into press",
        None),
    ("Rowing Machine Sprint", Cardio, FullGym, Hard,
        "Row Sprint: all out on the erg",
        None),
    ("Assault Bike Sprint", Cardio, FullGym, Hard,
        "Bike Sprint: legs and lungs",
        None),
    // ── Full Body ────────────────────────────────────────────────────
    ("Burpees", FullBody, Bodyweight, Hard,
        "Burpees: love them, hate them, do them",
        Some("Squat, kick back to plank, push-up, jump feet in, jump up.")),
    ("Bear Crawl", FullBody, Bodyweight, Medium,
        "Bear Crawls: go full grizzly",
        Some("Crawl forward on hands and feet, knees just off ground. Keep core tight.")),
    ("Inch Worms", FullBody, Bodyweight, Easy,
        "Inch Worms: walk it out",
        Some("Stand, walk hands out to plank, walk feet to hands. Like measuring with inches.")),
    ("Plank Up-Downs", FullBody, Bodyweight, Medium,
        "Plank Up-Downs: elbows to hands",
        Some("Start in plank, go down to forearms one arm at a time, return to hands.")),
    ("Crab Walk", FullBody, Bodyweight, Easy,
        "Crab Walk: belly up, move it",
        Some("Sit with hands behind you, lift hips, walk on hands and feet. Face up.")),
    ("Commando Crawl", FullBody, Bodyweight, Medium,
        "Commando Crawl: stay low soldier",
        Some("Army crawl forward using elbows and knees. Stay low to ground.")),
    ("Wall Walks", FullBody, Wall, Hard,
        "Wall Walks: walk up the wall",
        Some("Start in plank facing away from wall, walk feet up wall while walking hands closer.")),
    ("Dumbbell Man Makers", FullBody, Dumbbells, Hard,
        "Man Makers: the everything move",
        None),
    ("Kettlebell Clean and Press", FullBody, Kettlebell, Hard,
        "Clean and Press: floor to overhead",
        None),
    ("Sled Push", FullBody, FullGym, Hard,
        "Sled Push: move the mountain",
        None),
    // ── HIIT ─────────────────────────────────────────────────────────
    ("Jump Squats", Hiit, Bodyweight, Hard,
        "Jump Squats: explode up",
        Some("Squat down, jump as high as you can, land softly back into the squat.")),
    ("Tuck Jumps", Hiit, Bodyweight, Hard,
        "Tuck Jumps: knees to chest in the air",
        None),
    ("Jumping Lunges", Hiit, Bodyweight, Hard,
        "Jumping Lunges: switch in the air",
        None),
    ("Sprint in Place", Hiit, Bodyweight, Medium,
        "Sprint in Place: go go go",
        None),
    ("Clap Push-Ups", Hiit, Bodyweight, Hard,
        "Clap Push-Ups: show off time",
        Some("Explosive push-up with hands leaving ground to clap. Land softly.")),
    ("Star Jumps", Hiit, Bodyweight, Easy,
        "Star Jumps: be the star",
        None),
    ("Chair Burpees", Hiit, Chair, Medium,
        "Chair Burpees: hands up high",
        Some("Perform burpee with hands on chair instead of floor.")),
    ("Dumbbell Snatch", Hiit, Dumbbells, Hard,
        "Dumbbell Snatch: floor to sky in one",
        None),
    ("Kettlebell High Pulls", Hiit, Kettlebell, Hard,
        "High Pulls: elbows up and back",
        None),
    // ── Core ─────────────────────────────────────────────────────────
    ("Plank Shoulder Taps", Core, Bodyweight, Medium,
        "Shoulder Taps: hips stay still",
        Some("Hold plank position, tap opposite shoulder with hand. Keep hips stable.")),
    ("Hollow Body Hold", Core, Bodyweight, Hard,
        "Hollow Hold: banana mode",
        Some("Lie on back, press lower back down, lift shoulders and legs. Hold hollow shape.")),
    ("V-Ups", Core, Bodyweight, Hard,
        "V-Ups: fold in half",
        Some("Lie flat, simultaneously lift legs and torso to form V shape. Touch toes if possible.")),
    ("Leg Raises", Core, Bodyweight, Medium,
        "Leg Raises: slow on the way down",
        Some("Lie on back, lift straight legs to 90 degrees, lower slowly without touching floor.")),
    ("Bicycle Crunches", Core, Bodyweight, Easy,
        "Bicycle Crunches: pedal it out",
        None),
    ("Russian Twists", Core, Bodyweight, Easy,
        "Russian Twists: side to side",
        None),
    ("Dead Bug", Core, Bodyweight, Easy,
        "Dead Bugs: opposite arm, opposite leg",
        None),
    ("Side Plank Hip Dips", Core, Bodyweight, Medium,
        "Side Plank Dips: obliques on notice",
        Some("Hold side plank, lower hip toward ground, lift back up. Control the movement.")),
    ("Dumbbell Woodchop", Core, Dumbbells, Medium,
        "Woodchops: chop it diagonal",
        None),
    // ── Mobility ─────────────────────────────────────────────────────
    ("World's Greatest Stretch", Mobility, Bodyweight, Easy,
        "World's Greatest Stretch: it earned the name",
        Some("Lunge with rotation and reach. Hits multiple muscle groups.")),
    ("Cat Cow Stretch", Mobility, Bodyweight, Easy,
        "Cat Cow: round and arch",
        Some("On hands and knees, arch and round back alternately. Spinal mobility.")),
    ("Downward Dog", Mobility, Bodyweight, Easy,
        "Downward Dog: hips to the ceiling",
        Some("Hands and feet on ground, hips up high. Form inverted V shape.")),
    ("Wall Angels", Mobility, Wall, Easy,
        "Wall Angels: snow angels standing up",
        Some("Back against wall, move arms up and down like making snow angel.")),
    ("Seated Spinal Twist", Mobility, Chair, Easy,
        "Seated Twist: wring it out",
        Some("Sit tall, rotate spine to one side. Hold and switch.")),
];

pub(super) fn exercises() -> Vec<Exercise> {
    TABLE
        .iter()
        .enumerate()
        .map(
            |(i, (name, goal, equipment, intensity, caption, description))| Exercise {
                id: i as u32 + 1,
                name: (*name).to_string(),
                goal: goal.clone(),
                equipment: equipment.clone(),
                intensity: *intensity,
                caption: (*caption).to_string(),
                description: description.map(str::to_string),
            },
        )
        .collect()
}
