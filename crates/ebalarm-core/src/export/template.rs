//! Alarm table column template
//!
//! Header labels and per-row cells of the EasyBuilder Pro alarm import
//! sheet. Positions are the contract with the import tool: labels are kept
//! verbatim, duplicates and the historical `ID chaine enregistrementID Chaine`
//! label included, so the header row is one label shorter than a data row.

/// Value of the `VERSION` metadata cell
pub const FORMAT_VERSION: &str = "4";
/// Value of the `HARDWARE_VERSION` metadata cell
pub const HARDWARE_VERSION: &str = "159";

/// Font color column value, the import tool default
pub const DEFAULT_FONT_COLOR: &str = "(0, 0, 0)";

pub const HEADER_COUNT: usize = 178;
pub const COLUMN_COUNT: usize = 179;

/// Header row labels, written at row index 1
pub const HEADERS: [&str; HEADER_COUNT] = [
    "Catégorie",
    "Priorité",
    "Type Adresse",
    "Nom API (Lecture)",
    "Type variable (Lecture)",
    "Tag Système (lecture)",
    "Tag Utilisateur (Lecture)",
    "Adresse (Lecture)",
    "Index (Lecture)",
    "Format donnée (Lecture)",
    "Notification activé",
    "Activé (Notification)",
    "Nom API (Notification)",
    "Type variable (Notification)",
    "Tag Système (Notification)",
    "Tag Stilisateur (Notification)",
    "Adresse (Notification)",
    "Index (Notification)",
    "Condition",
    "Valeur de déclenchement",
    "Contenu",
    "bibliothèque de Labels activé",
    "Nom de label",
    "Police",
    "Couleur",
    "Valeur Acquittement",
    "Son activé",
    "Nom de la bibliothèque de sons",
    "Index son",
    "Nombre de multi-watch",
    "Nom API (WATCH1)",
    "Type variable (WATCH1)",
    "Tag Système (WATCH1)",
    "Tag Utilisateur (WATCH1)",
    "Addresse (WATCH1)",
    "Index (WATCH1)",
    "Format de donnée (WATCH1)",
    "Nbr. De mots (WATCH1)",
    "Nom API (WATCH2)",
    "Type variable (WATCH2)",
    "Tag Système (WATCH2)",
    "Tag Utilisateur (WATCH2)",
    "Addresse (WATCH2)",
    "Index (WATCH2)",
    "Format de donnée (WATCH2)",
    "Nbr. De mots (WATCH2)",
    "Nom API (WATCH3)",
    "Type variable (WATCH3)",
    "Tag Système (WATCH3)",
    "Tag Utilisateur (WATCH3)",
    "Addresse (WATCH3)",
    "Index (WATCH3)",
    "Format de donnée (WATCH3)",
    "Nbr. De mots (WATCH3)",
    "Nom API (WATCH4)",
    "Type variable (WATCH4)",
    "Tag Système (WATCH4)",
    "Tag Utilisateur (WATCH4)",
    "Addresse (WATCH4)",
    "Index (WATCH4)",
    "Format de donnée (WATCH4)",
    "Nbr. De mots (WATCH4)",
    "Nom API (WATCH5)",
    "Type variable (WATCH5)",
    "Tag Système (WATCH5)",
    "Tag Utilisateur (WATCH5)",
    "Addresse (WATCH5)",
    "Index (WATCH5)",
    "Format de donnée (WATCH5)",
    "Nbr. De mots (WATCH5)",
    "Nom API (WATCH6)",
    "Type variable (WATCH6)",
    "Tag Système (WATCH6)",
    "Tag Utilisateur (WATCH6)",
    "Addresse (WATCH6)",
    "Index (WATCH6)",
    "Format de donnée (WATCH6)",
    "Nbr. De mots (WATCH6)",
    "Nom API (WATCH7)",
    "Type variable (WATCH7)",
    "Tag Système (WATCH7)",
    "Tag Utilisateur (WATCH7)",
    "Addresse (WATCH7)",
    "Index (WATCH7)",
    "Format de donnée (WATCH7)",
    "Nbr. De mots (WATCH7)",
    "Nom API (WATCH7)",
    "Type variable (WATCH8)",
    "Tag Système (WATCH8)",
    "Tag Utilisateur (WATCH8)",
    "Addresse (WATCH8)",
    "Index (WATCH8)",
    "Format de donnée (WATCH8)",
    "Nbr. De mots (WATCH8)",
    "Bip continu",
    "Condition d’arrêt du bip continu",
    "Intervalle des bips",
    "Envoyer e-mail au déclenchement de l'alarme",
    "Envoi e-mail au retour à la normale de l'alarme",
    "Destinataires (déclenchement)",
    "Destinataires Cc (déclenchement)",
    "Destinataires Cci (déclenchement)",
    "Utilise contenu de l'alarme comme sujet (déclenchement)",
    "Sujet (déclenchement)",
    "Utilise la bibliothèque label (déclenchement)",
    "Nom du label (déclenchement)",
    "Entête (déclenchement)",
    "Utilise la bibliothèque label (déclenchement)",
    "Nom du label (Entête)",
    "Signature (déclenchement)",
    "Utilise la bibliothèque label (signature)",
    "Nom du label (signature)",
    "Capture écran",
    "Destinataires (Retour à la normale)",
    "Destinataires Cc (Retour à la normale)",
    "Destinataires Cci (Retour à la normale)",
    "Utilise contenu de l'alarme comme sujet (Retour à la normale)",
    "Sujet (Retour à la normale)",
    "Utilise la bibliothèque label (Retour à la normale)",
    "Nom du label (Retour à la normale)",
    "Entête (Retour à la normale)",
    "Utilise la bibliothèque label (Retour à la normale)",
    "Nom du label (Entête)",
    "Signature (Retour à la normale)",
    "Utilise la bibliothèque label (signature)",
    "Nom du label (signature)",
    "Délais",
    "Condition dynamique",
    "Nom API (Condition)",
    "Type variable (Condition)",
    "Tag Système (Condition)",
    "Tag Utilisateur (Condition)",
    "Adresse (Condition)",
    "Index (Condition)",
    "Format donnée (Condition)",
    "Occurrence",
    "Nom API (Occurrence)",
    "Type variable (Occurrence)",
    "Tag Système (Occurrence)",
    "Tag Utilisateur (Occurrence)",
    "Adresse (Occurrence)",
    "Index (Occurrence)",
    "Format donnée (Occurrence)",
    "Dans tolérance",
    "Hors tolérance",
    "Suivre",
    "Utiliser chaine de caractère",
    "ID Section",
    "Dynamique",
    "ID chaine enregistrementID Chaine",
    "Nom API (ID Chaine)",
    "Type variable (ID Chaine)",
    "Tag Système (ID Chaine)",
    "Tag Utilisateur (ID Chaine)",
    "Adresse (ID Chaine)",
    "Index (ID Chaine)",
    "Format donnée (ID Chaine)",
    "Push Notification",
    "Temps écoulé",
    "Nom API (Temps écoulé)",
    "Type variable (Temps écoulé)",
    "Tag Système (Temps écoulé)",
    "Tag Utilisateur (Temps écoulé)",
    "Adresse (Temps écoulé)",
    "Index (Temps écoulé)",
    "Format donnée (Temps écoulé)",
    "Couleur de fond",
    "Couleur (Couleur de fond)",
    "Sous-catégorie 1",
    "Sous-catégorie 2",
    "Contrôle (Activer/Désactiver)",
    "Mise à ON (Activer/Désactiver)",
    "Nom du périphérique (Activer/Désactiver)",
    "Type de périphérique (Activer/Désactiver)",
    "Tag système (Activer/Désactiver)",
    "Tag définie par l’utilisateur (Activer/Désactiver)",
    "Adresse (Activer/Désactiver)",
    "Index (Activer/Désactiver)",
];

/// Content of one data-row cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Constant dictated by the import format; empty means blank cell
    Text(&'static str),
    /// `"{id}: Category {id}"`
    CategoryLabel,
    /// PLC (device) name
    PlcName,
    /// Symbol name as the device address
    Address,
    /// Symbol comment as the alarm message
    Message,
    /// Category background color as `(r, g, b)`
    BackgroundColor,
}

use self::Cell::{Address, BackgroundColor, CategoryLabel, Message, PlcName, Text};

/// Cells of every data row, by column index
pub const ROW_TEMPLATE: [Cell; COLUMN_COUNT] = [
    CategoryLabel, // 0
    Text("Low"), // 1
    Text("Bit"), // 2
    PlcName, // 3
    Text("BOOL"), // 4
    Text("False"), // 5
    Text("False"), // 6
    Address, // 7
    Text("null"), // 8
    Text(" "), // 9
    Text("False"), // 10
    Text("False"), // 11
    Text(""), // 12
    Text(""), // 13
    Text("False"), // 14
    Text("False"), // 15
    Text(""), // 16
    Text("null"), // 17
    Text("bt: 1"), // 18
    Text("0"), // 19
    Message, // 20
    Text("False"), // 21
    Text(""), // 22
    Text("Droid Sans Fallback"), // 23
    Text(DEFAULT_FONT_COLOR), // 24
    Text("11"), // 25
    Text("False"), // 26
    Text(""), // 27
    Text("0"), // 28
    Text("0"), // 29
    Text(""), // 30
    Text(""), // 31
    Text("False"), // 32
    Text("False"), // 33
    Text(""), // 34
    Text("null"), // 35
    Text(""), // 36
    Text(""), // 37
    Text(""), // 38
    Text(""), // 39
    Text("False"), // 40
    Text("False"), // 41
    Text(""), // 42
    Text("null"), // 43
    Text(""), // 44
    Text(""), // 45
    Text(""), // 46
    Text(""), // 47
    Text("False"), // 48
    Text("False"), // 49
    Text(""), // 50
    Text("null"), // 51
    Text(""), // 52
    Text(""), // 53
    Text(""), // 54
    Text(""), // 55
    Text("False"), // 56
    Text("False"), // 57
    Text(""), // 58
    Text("null"), // 59
    Text(""), // 60
    Text(""), // 61
    Text(""), // 62
    Text(""), // 63
    Text("False"), // 64
    Text("False"), // 65
    Text(""), // 66
    Text("null"), // 67
    Text(""), // 68
    Text(""), // 69
    Text(""), // 70
    Text(""), // 71
    Text("False"), // 72
    Text("False"), // 73
    Text(""), // 74
    Text("null"), // 75
    Text(""), // 76
    Text(""), // 77
    Text(""), // 78
    Text(""), // 79
    Text("False"), // 80
    Text("False"), // 81
    Text(""), // 82
    Text("null"), // 83
    Text(""), // 84
    Text(""), // 85
    Text(""), // 86
    Text(""), // 87
    Text("False"), // 88
    Text("False"), // 89
    Text(""), // 90
    Text("null"), // 91
    Text(""), // 92
    Text(""), // 93
    Text("False"), // 94
    Text("NONE"), // 95
    Text("10"), // 96
    Text("False"), // 97
    Text("False"), // 98
    Text(""), // 99
    Text(""), // 100
    Text(""), // 101
    Text(""), // 102
    Text(""), // 103
    Text(""), // 104
    Text(""), // 105
    Text(""), // 106
    Text(""), // 107
    Text(""), // 108
    Text(""), // 109
    Text(""), // 110
    Text(""), // 111
    Text(""), // 112
    Text(""), // 113
    Text(""), // 114
    Text(""), // 115
    Text(""), // 116
    Text(""), // 117
    Text(""), // 118
    Text(""), // 119
    Text(""), // 120
    Text(""), // 121
    Text(""), // 122
    Text(""), // 123
    Text(""), // 124
    Text(""), // 125
    Text("1"), // 126
    Text("0"), // 127
    PlcName, // 128
    Text("BOOL"), // 129
    Text("False"), // 130
    Text("False"), // 131
    Address, // 132
    Text("null"), // 133
    Text("True"), // 134
    Text("False"), // 135
    Text("Local HMI"), // 136
    Text("?"), // 137
    Text("False"), // 138
    Text("False"), // 139
    Text("0"), // 140
    Text("null"), // 141
    Text("16-bit Unsigned"), // 142
    Text(""), // 143
    Text(""), // 144
    Text("False"), // 145
    Text("False"), // 146
    Text(""), // 147
    Text(""), // 148
    Text(""), // 149
    Text(""), // 150
    Text(""), // 151
    Text("False"), // 152
    Text("False"), // 153
    Text(""), // 154
    Text("null"), // 155
    Text(""), // 156
    Text(""), // 157
    Text("False"), // 158
    Text("False"), // 159
    Text(""), // 160
    Text(""), // 161
    Text("False"), // 162
    Text("False"), // 163
    Text(""), // 164
    Text("null"), // 165
    Text(""), // 166
    Text("True"), // 167
    BackgroundColor, // 168
    Text(""), // 169
    Text(""), // 170
    Text("False"), // 171
    Text("True"), // 172
    Text(""), // 173
    Text(""), // 174
    Text("False"), // 175
    Text("False"), // 176
    Text(""), // 177
    Text("null"), // 178
];

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(wanted: Cell) -> Vec<usize> {
        ROW_TEMPLATE
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == wanted)
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn test_variable_columns_positions() {
        assert_eq!(positions(CategoryLabel), vec![0]);
        assert_eq!(positions(PlcName), vec![3, 128]);
        assert_eq!(positions(Address), vec![7, 132]);
        assert_eq!(positions(Message), vec![20]);
        assert_eq!(positions(BackgroundColor), vec![168]);
    }

    #[test]
    fn test_fixed_columns() {
        assert_eq!(ROW_TEMPLATE[1], Text("Low"));
        assert_eq!(ROW_TEMPLATE[2], Text("Bit"));
        assert_eq!(ROW_TEMPLATE[23], Text("Droid Sans Fallback"));
        assert_eq!(ROW_TEMPLATE[24], Text(DEFAULT_FONT_COLOR));
        assert_eq!(ROW_TEMPLATE[142], Text("16-bit Unsigned"));
        assert_eq!(ROW_TEMPLATE[COLUMN_COUNT - 1], Text("null"));
    }

    #[test]
    fn test_header_labels_are_verbatim() {
        assert_eq!(HEADERS[0], "Catégorie");
        assert_eq!(HEADERS[20], "Contenu");
        assert_eq!(HEADERS[86], "Nom API (WATCH7)");
        assert_eq!(HEADERS[149], "ID chaine enregistrementID Chaine");
        assert_eq!(HEADERS[HEADER_COUNT - 1], "Index (Activer/Désactiver)");
        assert_eq!(HEADER_COUNT + 1, COLUMN_COUNT);
    }

    #[test]
    fn test_duplicated_labels_are_preserved() {
        let duplicated = HEADERS
            .iter()
            .filter(|label| **label == "Nom du label (Entête)")
            .count();
        assert_eq!(duplicated, 2);
    }
}
