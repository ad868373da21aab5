//! Spanish stop words.
//!
//! Function words (articles, prepositions, pronouns, auxiliaries, common
//! adverbs) that carry little content. They never count as complex words
//! in the Gunning Fog index, however many syllables they have.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-case Spanish stop words.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Articles and contractions
    set.extend(["el", "la", "los", "las", "lo", "un", "una", "unos", "unas", "al", "del"]);

    // Prepositions
    set.extend([
        "a", "ante", "bajo", "con", "contra", "de", "desde", "durante", "en", "entre", "hacia",
        "hasta", "mediante", "para", "por", "según", "sin", "sobre", "tras",
    ]);

    // Conjunctions
    set.extend([
        "y", "e", "o", "u", "ni", "pero", "sino", "aunque", "porque", "pues", "que", "si",
        "como", "cuando", "mientras", "entonces",
    ]);

    // Pronouns
    set.extend([
        "yo", "tú", "él", "ella", "ello", "nosotros", "nosotras", "vosotros", "vosotras",
        "ellos", "ellas", "usted", "ustedes", "me", "te", "se", "nos", "os", "le", "les", "mí",
        "ti", "sí", "conmigo", "contigo", "consigo",
    ]);

    // Possessives and demonstratives
    set.extend([
        "mi", "mis", "tu", "tus", "su", "sus", "nuestro", "nuestra", "nuestros", "nuestras",
        "vuestro", "vuestra", "vuestros", "vuestras", "suyo", "suya", "suyos", "suyas", "mío",
        "mía", "míos", "mías", "tuyo", "tuya", "este", "esta", "estos", "estas", "esto", "ese",
        "esa", "esos", "esas", "eso", "aquel", "aquella", "aquellos", "aquellas", "aquello",
    ]);

    // Interrogatives and relatives
    set.extend([
        "qué", "quién", "quiénes", "quien", "quienes", "cuál", "cuáles", "cual", "cuales",
        "cuánto", "cuánta", "cuántos", "cuántas", "cuanto", "cuanta", "cuantos", "cuantas",
        "dónde", "donde", "cómo", "cuándo", "cuyo", "cuya", "cuyos", "cuyas",
    ]);

    // Quantifiers and indefinites
    set.extend([
        "algo", "alguien", "alguno", "alguna", "algunos", "algunas", "algún", "nada", "nadie",
        "ninguno", "ninguna", "ningún", "todo", "toda", "todos", "todas", "otro", "otra",
        "otros", "otras", "mismo", "misma", "mismos", "mismas", "tanto", "tanta", "tantos",
        "tantas", "mucho", "mucha", "muchos", "muchas", "poco", "poca", "pocos", "pocas",
        "varios", "varias", "cada", "ambos", "ambas", "demás", "cualquier", "cualquiera",
    ]);

    // Common adverbs
    set.extend([
        "no", "sí", "ya", "muy", "más", "menos", "tan", "también", "tampoco", "siempre",
        "nunca", "jamás", "aquí", "allí", "ahí", "allá", "acá", "ahora", "luego", "después",
        "antes", "todavía", "aún", "aun", "bien", "mal", "así", "casi", "sólo", "solo", "además",
        "incluso", "apenas", "quizá", "quizás",
    ]);

    // Auxiliary and copulative verb forms
    set.extend([
        "ser", "es", "son", "era", "eran", "fue", "fueron", "sea", "sean", "sido", "siendo",
        "soy", "eres", "somos", "estar", "está", "están", "estaba", "estaban", "estuvo",
        "estado", "estoy", "haber", "ha", "han", "he", "has", "hemos", "había", "habían", "hay",
        "hubo", "habido", "haya", "tener", "tiene", "tienen", "tenía", "tenían", "tuvo",
        "hacer", "hace", "hacen", "hizo", "poder", "puede", "pueden", "podía", "pudo", "ir",
        "va", "van", "iba", "iban",
    ]);

    set
});

/// Check if a word is a Spanish stop word, ignoring case.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_words_are_stopwords() {
        assert!(is_stopword("el"));
        assert!(is_stopword("La"));
        assert!(is_stopword("había"));
        assert!(is_stopword("nosotros"));
        assert!(is_stopword("QUÉ"));
    }

    #[test]
    fn content_words_are_not_stopwords() {
        assert!(!is_stopword("camino"));
        assert!(!is_stopword("magnífica"));
        assert!(!is_stopword("halcón"));
    }
}
