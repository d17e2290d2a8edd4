use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TipCategory {
    pub category: &'static str,
    pub tips: [Tip; 3],
}

const fn tip(title: &'static str, description: &'static str, benefit: &'static str) -> Tip {
    Tip {
        title,
        description,
        benefit,
    }
}

pub static SUGGESTIONS: [TipCategory; 6] = [
    TipCategory {
        category: "Breathing Exercises",
        tips: [
            tip(
                "4-7-8 Breathing",
                "Inhale for 4 counts, hold for 7, exhale for 8. Repeat 3-4 times.",
                "Reduces anxiety and promotes relaxation",
            ),
            tip(
                "Box Breathing",
                "Inhale for 4, hold for 4, exhale for 4, hold for 4. Repeat.",
                "Improves focus and reduces stress",
            ),
            tip(
                "Deep Belly Breathing",
                "Place one hand on chest, one on belly. Focus on breathing into your belly.",
                "Activates the relaxation response",
            ),
        ],
    },
    TipCategory {
        category: "Physical Wellness",
        tips: [
            tip(
                "10-Minute Walk",
                "Take a brief walk outside or around your home.",
                "Boosts endorphins and improves mood",
            ),
            tip(
                "Gentle Stretching",
                "Stretch your neck, shoulders, and back for 5 minutes.",
                "Releases physical tension and stress",
            ),
            tip(
                "Progressive Muscle Relaxation",
                "Tense and release each muscle group from toes to head.",
                "Reduces physical and mental tension",
            ),
        ],
    },
    TipCategory {
        category: "Mindfulness",
        tips: [
            tip(
                "5-4-3-2-1 Grounding",
                "Notice 5 things you see, 4 you hear, 3 you touch, 2 you smell, 1 you taste.",
                "Brings you back to the present moment",
            ),
            tip(
                "Mindful Observation",
                "Choose an object and observe it for 2-3 minutes without judgment.",
                "Improves focus and awareness",
            ),
            tip(
                "Body Scan Meditation",
                "Notice sensations in each part of your body from head to toe.",
                "Increases body awareness and relaxation",
            ),
        ],
    },
    TipCategory {
        category: "Positive Affirmations",
        tips: [
            tip(
                "Self-Compassion",
                "\"I am worthy of love and kindness, especially from myself.\"",
                "Builds self-esteem and reduces self-criticism",
            ),
            tip(
                "Strength Reminder",
                "\"I have overcome challenges before, and I can do it again.\"",
                "Reinforces resilience and confidence",
            ),
            tip(
                "Present Moment",
                "\"This feeling is temporary, and I am safe in this moment.\"",
                "Provides perspective during difficult times",
            ),
        ],
    },
    TipCategory {
        category: "Self-Care Activities",
        tips: [
            tip(
                "Warm Bath or Shower",
                "Take 15-20 minutes for a relaxing bath with calming scents.",
                "Soothes muscles and calms the mind",
            ),
            tip(
                "Listen to Music",
                "Play your favorite calming or uplifting songs.",
                "Regulates emotions and improves mood",
            ),
            tip(
                "Creative Expression",
                "Draw, write, or create something for 10-15 minutes.",
                "Provides emotional outlet and stress relief",
            ),
        ],
    },
    TipCategory {
        category: "Quick Mood Boosters",
        tips: [
            tip(
                "Gratitude List",
                "Write down 3 things you're grateful for right now.",
                "Shifts focus to positive aspects of life",
            ),
            tip(
                "Reach Out to Someone",
                "Send a message to a friend or family member.",
                "Builds connection and reduces isolation",
            ),
            tip(
                "Accomplish Something Small",
                "Tidy up a small area or complete a simple task.",
                "Provides sense of accomplishment and control",
            ),
        ],
    },
];
