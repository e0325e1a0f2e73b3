use regex::Regex;

use crate::Listing;

/// One entry of the ordered dispatch table: a set of case-insensitive
/// patterns and the reply generator invoked when any of them matches.
pub(crate) struct Rule {
    patterns: Vec<Regex>,
    generate: fn(&Listing) -> String,
}

impl Rule {
    pub(crate) fn matches(&self, message: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(message))
    }

    pub(crate) fn reply(&self, listing: &Listing) -> String {
        (self.generate)(listing)
    }
}

fn rule(patterns: &[&str], generate: fn(&Listing) -> String) -> Rule {
    Rule {
        patterns: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid reply pattern"))
            .collect(),
        generate,
    }
}

/// The canonical reply rules, in contract order: price before negotiation,
/// negotiation before barter, greeting and thanks last.
pub(crate) fn canonical_rules() -> Vec<Rule> {
    vec![
        rule(&["cen[ay]?|koszt|opłat[ay]?|ile to kosztuje"], |listing| {
            if let Some(price) = listing.price_per_week {
                format!("Cena za {} wynosi {} zł tygodniowo", listing.name, price)
            } else {
                format!(
                    "{} jest dostępna w systemie barteru. Możemy zaproponować wymianę usług \
                     lub towarów - zapraszamy do omówienia",
                    listing.name
                )
            }
        }),
        rule(&["taniej|zniżk[ay]?|rabat|negocjacja|da się mniej|obniż"], |listing| {
            if let Some(price) = listing.price_per_week {
                format!(
                    "Cena za {} to {} zł/tydzień. Dla długoterminowych umów możemy rozważyć rabat",
                    listing.name, price
                )
            } else {
                format!(
                    "{} jest dostępna w systemie barteru. Zaproponuj nam swoją ofertę wymiany",
                    listing.name
                )
            }
        }),
        rule(&["barter|wymiana|oferta wymiany|co możecie zaoferować"], |listing| {
            if listing.price_per_week.is_some() {
                format!(
                    "Możemy rozważyć również opcje barteru dla {}. Zaproponuj nam swoją ofertę",
                    listing.name
                )
            } else {
                format!(
                    "{} jest dostępna głównie w systemie barteru. Jaka usługa lub towar możesz \
                     nam zaproponować",
                    listing.name
                )
            }
        }),
        rule(&["gdzie.*znajduj|lokalizacj|adres|położenie"], |listing| {
            format!(
                "{} znajduje się w warszawie. Pełne szczegóły lokalizacji są dostępne w opisie \
                 oferty",
                listing.name
            )
        }),
        rule(&["dostępn|rezerwacj|zarezerwować|kiedy można"], |listing| {
            format!(
                "{} jest dostępna do rezerwacji. Skontaktuj się z nami aby zarezerwować \
                 konkretny termin",
                listing.name
            )
        }),
        rule(
            &["rozmiar|wymiary|powierzchni|ile metrów|powierzchnia|duży|duża|duże"],
            |listing| {
                format!(
                    "Szczegółowe wymiary i powierzchnia {} znajdują się w opisie oferty",
                    listing.name
                )
            },
        ),
        rule(&["opis|szczegół|info|informacja|charakter"], |listing| {
            format!(
                "Pełny opis {} wraz ze wszystkimi szczegółami znajdziesz w karcie oferty",
                listing.name
            )
        }),
        rule(&["publiczność|grupa docelowa|do kogo|kto|zasięg|widzenie"], |listing| {
            format!(
                "{} ma świetny zasięg i widoczność. Szczegóły o odbiorach dostępne w parametrach \
                 oferty",
                listing.name
            )
        }),
        rule(&["czasu|długo|okres|umowa|miesiąc|rok"], |_| {
            "Dostępne są elastyczne okresy rezerwacji. Można wynająć od tygodnia do całego roku \
             - do omówienia"
                .to_string()
        }),
        rule(&["oświetlenie|nocą|podświetl|neon|iluminacja"], |listing| {
            format!(
                "{} ma profesjonalne oświetlenie. Szczegóły dostępne w opisie technicznym oferty",
                listing.name
            )
        }),
        rule(&["ochrona|bezpieczeństwo|monitoring|kamera"], |_| {
            "Miejsce jest dobrze zabezpieczone. Więcej informacji na temat bezpieczeństwa \
             udzielimy w rozmowie"
                .to_string()
        }),
        rule(&["typ|kategoria|format|rodzaj"], |listing| {
            format!(
                "{} to powierzchnia wysoko widoczna i atrakcyjna lokalizacyjnie. Typ i format \
                 dostępne w karcie",
                listing.name
            )
        }),
        rule(&["warunki|umowa|regulamin|zasady"], |_| {
            "Warunki wynajmu są standardowe i elastyczne. Chętnie omówimy wszelkie szczegóły \
             umowy"
                .to_string()
        }),
        rule(&["promocja|oferta specjalna|rabat|zniżka|akcja"], |_| {
            "Mamy różne opcje promocyjne i pakiety. Sprawdź jakie warunki możemy Ci zaproponować"
                .to_string()
        }),
        rule(&["kontrakt|podpisać|umowa|formalne"], |_| {
            "Zapraszamy do omówienia szczegółów i sformalizowania umowy. Procedura jest prosta \
             i przejrzysta"
                .to_string()
        }),
        rule(&["support|pomoc|pytania|wiadomo"], |_| {
            "Chętnie odpowiadamy na wszystkie pytania. Jeśli masz jakiekolwiek wątpliwości, \
             daj nam znać"
                .to_string()
        }),
        rule(&["cześć|hej|elo|witaj|hi|hello"], |listing| {
            format!(
                "Cześć! Witaj w czacie. Pytaj mnie o wszystko dotyczące {}. Chętnie Ci pomogę",
                listing.name
            )
        }),
        rule(&["dziękuję|dzięki|spasibo|super"], |_| {
            "Nie ma za co! Jeśli będziesz mieć jeszcze pytania, zawsze chętnie Ci odpowiem"
                .to_string()
        }),
    ]
}
