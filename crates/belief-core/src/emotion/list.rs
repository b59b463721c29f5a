//! The static emotion reference list.
//!
//! Order matters: the leading entries double as the "common emotions" shown
//! before the user types anything, and search results preserve this order
//! within each match tier.

use super::model::Emotion;

/// The canonical ordered emotion list.
pub const EMOTIONS: &[Emotion] = &[
    Emotion::new("Happy", "Feeling or showing pleasure or contentment.", &["glad", "cheerful", "delighted", "joyful", "pleased"]),
    Emotion::new("Sad", "Feeling unhappy or showing sorrow.", &["unhappy", "sorrowful", "dejected", "downcast", "blue"]),
    Emotion::new("Angry", "Strong feeling of displeasure, hostility or antagonism.", &["furious", "enraged", "outraged", "indignant", "irritated"]),
    Emotion::new("Afraid", "Feeling fear or anxiety.", &["fearful", "scared", "frightened", "terrified", "apprehensive"]),
    Emotion::new("Anxious", "Feeling worry, nervousness, or unease about something.", &["worried", "nervous", "uneasy", "apprehensive", "concerned"]),
    Emotion::new("Confused", "Unable to think clearly or understand.", &["bewildered", "puzzled", "perplexed", "baffled", "disoriented"]),
    Emotion::new("Hurt", "Emotionally wounded or suffering.", &["wounded", "pained", "injured", "distressed", "aching"]),
    Emotion::new("Lonely", "Sad due to emotional or social isolation.", &["isolated", "alone", "abandoned", "solitary", "forsaken"]),
    Emotion::new("Delighted", "Very pleased and joyful.", &["happy", "pleased", "joyful", "thrilled"]),
    Emotion::new("Ebullient", "Overflowing with enthusiasm or excitement.", &["exuberant", "bubbly", "enthusiastic"]),
    Emotion::new("Ecstatic", "Feeling extreme, overwhelming happiness.", &["elated", "overjoyed", "thrilled", "euphoric"]),
    Emotion::new("Elated", "Joyfully excited and uplifted.", &["overjoyed", "thrilled", "jubilant", "delighted"]),
    Emotion::new("Energetic", "Full of vitality and liveliness.", &["lively", "vigorous", "dynamic", "spirited"]),
    Emotion::new("Enthusiastic", "Showing intense interest or enjoyment.", &["eager", "keen", "passionate", "fervent"]),
    Emotion::new("Euphoric", "Intensely joyful or blissful.", &["elated", "ecstatic", "rapturous", "blissful"]),
    Emotion::new("Excited", "Thrilled with anticipation or delight.", &["thrilled", "enthusiastic", "eager", "animated"]),
    Emotion::new("Exhilarated", "Energized by happiness or joy.", &["thrilled", "elated", "stimulated", "invigorated"]),
    Emotion::new("Overjoyed", "Extremely and visibly happy.", &["ecstatic", "elated", "thrilled", "delighted"]),
    Emotion::new("Thrilled", "Deeply excited and pleased.", &["delighted", "ecstatic", "overjoyed", "elated"]),
    Emotion::new("Vibrant", "Bright, full of life and excitement.", &["radiant", "energetic", "lively", "dynamic"]),
    Emotion::new("Cheerful", "Openly happy and light-hearted.", &["happy", "joyful", "upbeat", "bright"]),
    Emotion::new("Gleeful", "Full of joyful delight.", &["joyful", "merry", "jubilant", "happy"]),
    Emotion::new("Jovial", "Friendly and good-humored.", &["cheerful", "jolly", "merry", "genial"]),
    Emotion::new("Merry", "Jolly and full of fun.", &["cheerful", "jolly", "jovial", "lighthearted"]),
    Emotion::new("Contented", "Peacefully satisfied and at ease.", &["satisfied", "pleased", "gratified", "fulfilled"]),
    Emotion::new("Serene", "Calm, peaceful, and untroubled.", &["peaceful", "calm", "tranquil", "placid"]),
    Emotion::new("Adoring", "Loving someone deeply and reverently.", &["loving", "devoted", "fond", "doting"]),
    Emotion::new("Compassionate", "Concerned for others' pain with a desire to help.", &["empathetic", "sympathetic", "caring", "kind"]),
    Emotion::new("Devoted", "Deeply loyal and committed.", &["dedicated", "faithful", "loyal", "steadfast"]),
    Emotion::new("Passionate", "Driven by strong emotions or love.", &["ardent", "fervent", "intense", "zealous"]),
    Emotion::new("Affectionate", "Expressing love openly.", &["loving", "fond", "tender", "warm"]),
    Emotion::new("Kind", "Considerate and caring in action.", &["benevolent", "considerate", "thoughtful", "gentle"]),
    Emotion::new("Tender", "Gentle and caring emotionally.", &["soft", "gentle", "loving", "affectionate"]),
    Emotion::new("Sympathetic", "Feeling and expressing concern.", &["compassionate", "understanding", "caring", "supportive"]),
    Emotion::new("Depressed", "Deep, lasting sadness and hopelessness.", &["dejected", "miserable", "downcast", "despondent"]),
    Emotion::new("Dejected", "Downcast, dispirited, and sad.", &["downhearted", "disheartened", "discouraged", "low"]),
    Emotion::new("Despondent", "Without hope or optimism.", &["hopeless", "desperate", "forlorn", "inconsolable"]),
    Emotion::new("Desolate", "Isolated and filled with grief.", &["abandoned", "forsaken", "deserted", "bereft"]),
    Emotion::new("Empty", "Hollow and emotionally void.", &["vacant", "hollow", "unfulfilled", "numb"]),
    Emotion::new("Hopeless", "Without any expectation of improvement.", &["despairing", "desperate", "pessimistic", "forlorn"]),
    Emotion::new("Melancholy", "Deep, pensive sadness.", &["somber", "gloomy", "wistful", "sorrowful"]),
    Emotion::new("Miserable", "Very unhappy and in discomfort.", &["wretched", "dejected", "despondent", "downcast"]),
    Emotion::new("Inadequate", "Not good enough or not meeting expectations.", &["insufficient", "deficient", "lacking", "incapable"]),
    Emotion::new("Helpless", "Unable to act or protect oneself.", &["powerless", "vulnerable", "defenseless", "weak"]),
    Emotion::new("Inferior", "Feeling less than others in value or ability.", &["lesser", "substandard", "second-rate", "unworthy"]),
    Emotion::new("Worthless", "Feeling of having no value or significance.", &["useless", "insignificant", "valueless", "unimportant"]),
    Emotion::new("Overwhelmed", "Crushed or overpowered by demands or emotions.", &["swamped", "inundated", "overloaded", "overpowered"]),
    Emotion::new("Insecure", "Feeling uncertain or anxious about oneself.", &["unsure", "self-conscious", "unconfident", "doubtful"]),
    Emotion::new("Terrified", "Extremely frightened.", &["petrified", "horrified", "scared", "panic-stricken"]),
    Emotion::new("Horrified", "Experiencing terror or disgust.", &["appalled", "shocked", "aghast", "revolted"]),
    Emotion::new("Panicky", "Overcome by sudden, irrational fear.", &["frantic", "frenzied", "hysterical", "alarmed"]),
    Emotion::new("Petrified", "Frozen in terror.", &["terrified", "paralyzed", "stunned", "scared stiff"]),
    Emotion::new("Nervous", "Tense or uneasy about an upcoming event.", &["anxious", "apprehensive", "jittery", "edgy"]),
    Emotion::new("Scared", "Afraid or frightened.", &["frightened", "fearful", "terrified", "alarmed"]),
    Emotion::new("Uneasy", "Slightly fearful or uncomfortable.", &["worried", "anxious", "concerned", "troubled"]),
    Emotion::new("Baffled", "Utterly confused or perplexed.", &["puzzled", "confused", "perplexed", "mystified"]),
    Emotion::new("Befuddled", "Mentally muddled or dazed.", &["confused", "muddled", "bewildered", "perplexed"]),
    Emotion::new("Stunned", "Dazed or overwhelmed by sudden input.", &["shocked", "dazed", "astonished", "astounded"]),
    Emotion::new("Perplexed", "Completely baffled or puzzled.", &["puzzled", "confused", "bewildered", "baffled"]),
    Emotion::new("Uncertain", "Unsure or hesitant.", &["doubtful", "unsure", "indecisive", "hesitant"]),
    Emotion::new("Anguished", "In deep pain or despair, often from loss or betrayal.", &["distressed", "tormented", "suffering", "grief-stricken"]),
    Emotion::new("Crushed", "Emotionally broken or devastated.", &["devastated", "destroyed", "shattered", "heartbroken"]),
    Emotion::new("Devastated", "Overwhelmed by grief or emotional shock.", &["shattered", "crushed", "heartbroken", "destroyed"]),
    Emotion::new("Rejected", "Turned away or dismissed, often painfully.", &["spurned", "rebuffed", "snubbed", "shunned"]),
    Emotion::new("Wounded", "Deeply emotionally injured.", &["hurt", "injured", "pained", "damaged"]),
    Emotion::new("Furious", "Extremely angry, often visibly.", &["enraged", "irate", "livid", "infuriated"]),
    Emotion::new("Enraged", "Full of violent or uncontrollable anger.", &["furious", "infuriated", "livid", "seething"]),
    Emotion::new("Outraged", "Shocked and deeply angry, often due to injustice.", &["incensed", "infuriated", "furious", "indignant"]),
    Emotion::new("Irritated", "Bothered or impatient.", &["annoyed", "aggravated", "exasperated", "vexed"]),
    Emotion::new("Annoyed", "Mildly irritated.", &["bothered", "irked", "peeved", "displeased"]),
    Emotion::new("Abandoned", "Left completely alone or emotionally deserted.", &["deserted", "forsaken", "rejected", "stranded"]),
    Emotion::new("Isolated", "Separated from meaningful contact.", &["secluded", "cut off", "detached", "segregated"]),
    Emotion::new("Rejected", "Denied acceptance or affection.", &["spurned", "unwanted", "excluded", "dismissed"]),
    Emotion::new("Excluded", "Left out or pushed away.", &["ostracized", "shunned", "marginalized", "rejected"]),
    Emotion::new("Guilty", "Aware of and remorseful for having committed a wrong.", &["remorseful", "culpable", "blameworthy", "sorry"]),
    Emotion::new("Ashamed", "Feeling deep guilt or embarrassment about one's actions.", &["embarrassed", "humiliated", "mortified", "disgraced"]),
    Emotion::new("Remorseful", "Deeply regretful for one's actions and their impact.", &["regretful", "sorry", "contrite", "apologetic"]),
    Emotion::new("Regretful", "Wishing one had made a different choice; feeling remorseful.", &["sorry", "apologetic", "remorseful", "contrite"]),
    Emotion::new("Embarrassed", "Feeling awkward or ashamed about one's actions.", &["self-conscious", "uncomfortable", "mortified", "sheepish"]),
    Emotion::new("Awe", "Feeling of reverential respect mixed with fear or wonder.", &["wonder", "amazement", "astonishment", "reverence"]),
    Emotion::new("Joy", "Feeling of great pleasure and happiness.", &["delight", "happiness", "gladness", "glee", "elation"]),
    Emotion::new("Disgust", "Strong feeling of revulsion or profound disapproval.", &["revulsion", "repugnance", "abhorrence", "loathing"]),
    Emotion::new("Interest", "Feeling of wanting to know or learn about something.", &["curiosity", "inquisitiveness", "engagement", "fascination"]),
    Emotion::new("Pride", "Deep pleasure derived from one's own achievements.", &["satisfaction", "self-esteem", "dignity", "self-respect"]),
    Emotion::new("Surprise", "Feeling caused by something unexpected.", &["amazement", "astonishment", "wonder", "shock"]),
    Emotion::new("Gratitude", "Feeling of appreciation or thankfulness.", &["thankfulness", "appreciation", "gratefulness", "recognition"]),
    Emotion::new("Jealousy", "Envious resentment of someone or their achievements.", &["envy", "covetousness", "resentment", "bitterness"]),
    Emotion::new("Shame", "Painful feeling of humiliation or distress caused by wrongdoing.", &["humiliation", "embarrassment", "mortification", "disgrace"]),
    Emotion::new("Hope", "Feeling of expectation and desire for something to happen.", &["optimism", "expectation", "anticipation", "confidence"]),
    Emotion::new("Nostalgia", "Sentimental longing for a period in the past.", &["reminiscence", "sentimentality", "homesickness", "yearning"]),];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_populated_and_described() {
        assert!(EMOTIONS.len() >= 80);
        for emotion in EMOTIONS {
            assert!(!emotion.name.is_empty());
            assert!(!emotion.description.is_empty());
        }
    }

    #[test]
    fn common_entries_lead_the_list() {
        let names: Vec<&str> = EMOTIONS.iter().take(8).map(|e| e.name).collect();
        assert_eq!(
            names,
            [
                "Happy", "Sad", "Angry", "Afraid", "Anxious", "Confused", "Hurt", "Lonely"
            ]
        );
    }
}
