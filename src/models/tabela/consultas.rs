use crate::models::categorias::CONSULTAS;
use crate::models::record::TussRecord;

// Consultations and visits. Code 10101012 repeats on purpose: the source
// table carries one row per specialty, each with its own CBO code.
pub const CONSULTAS_TUSS: &[TussRecord] = &[
    TussRecord {
        code: "10101012",
        description: "CONSULTA EM CONSULTÓRIO (NO HORÁRIO NORMAL OU PREESTABELECIDO)",
        cbos: "225125",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CLÍNICO GERAL",
        cbos: "225125",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA REUMATOLOGISTA",
        cbos: "225136",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ALERGOLOGISTA/ IMUNOLOGISTA",
        cbos: "225110",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ACUPUNTURISTA",
        cbos: "225105",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ANGIOLOGISTA",
        cbos: "225115",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CARDIOLOGISTA",
        cbos: "225120",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM DERMATOLOGISTA",
        cbos: "225135",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MÉDICO DO TRABALHO",
        cbos: "225140",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MÉDICO DE FAMÍLIA E COMUNIDADE",
        cbos: "225130",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM GENETICISTA",
        cbos: "225148",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ENDOCRINOLOGISTA",
        cbos: "225155",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM FISIATRA",
        cbos: "225160",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM GASTROENTEROLOGISTA",
        cbos: "225165",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM GERIATRA",
        cbos: "225180",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM HEMATOLOGISTA",
        cbos: "225185",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM HOMEOPATA",
        cbos: "225190",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM INFECTOLOGISTA",
        cbos: "225103",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM NEFROLOGISTA",
        cbos: "225109",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM NEUROLOGISTA",
        cbos: "225112",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM NUTRÓLOGO",
        cbos: "225118",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ONCOLOGISTA CLÍNICO",
        cbos: "225121",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM PEDIATRA",
        cbos: "225124",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM PNEUMOLOGISTA",
        cbos: "225127",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM PSIQUIATRA",
        cbos: "225133",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MÉDICO INTENSIVISTA",
        cbos: "225150",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MÉDICO DO ESPORTE",
        cbos: "225122",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM GINECOLOGISTA/ OBSTETRA",
        cbos: "225250",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MASTOLOGISTA",
        cbos: "225255",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM OFTALMOLOGISTA",
        cbos: "225265",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ORTOPEDISTA/ TRAUMATOLOGISTA",
        cbos: "225270",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM OTORRINOLARINGOLOGISTA",
        cbos: "225275",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM UROLOGISTA",
        cbos: "225285",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM COLOPROCTOLOGISTA",
        cbos: "225215",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO GERAL",
        cbos: "225225",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO CARDIOVASCULAR",
        cbos: "225205",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO DE CABEÇA E PESCOÇO",
        cbos: "225210",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO DO APARELHO DIGESTIVO",
        cbos: "225220",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO PEDIÁTRICO",
        cbos: "225230",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO PLÁSTICO",
        cbos: "225235",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO TORÁCICO",
        cbos: "225240",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM CIRURGIÃO VASCULAR",
        cbos: "225245",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM NEUROCIRURGIÃO",
        cbos: "225260",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ANESTESIOLOGISTA",
        cbos: "225151",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM RADIOLOGISTA",
        cbos: "225320",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM RADIOTERAPEUTA",
        cbos: "225325",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM MÉDICO NUCLEAR",
        cbos: "225310",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM PATOLOGISTA",
        cbos: "225315",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM PATOLOGISTA CLÍNICO",
        cbos: "225305",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101012",
        description: "CONSULTA COM ENDOSCOPISTA",
        cbos: "225112",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101020",
        description: "CONSULTA EM DOMICÍLIO",
        cbos: "225125",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10101039",
        description: "CONSULTA EM PRONTO SOCORRO",
        cbos: "225125",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10102019",
        description: "VISITA HOSPITALAR (PACIENTE INTERNADO)",
        cbos: "225125",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10103023",
        description: "ATENDIMENTO AMBULATORIAL EM PUERICULTURA",
        cbos: "225124",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104020",
        description: "CONSULTA COM NUTRICIONISTA",
        cbos: "223710",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104038",
        description: "CONSULTA COM PSICÓLOGO",
        cbos: "251510",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104046",
        description: "CONSULTA COM FONOAUDIÓLOGO",
        cbos: "223810",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104054",
        description: "CONSULTA COM FISIOTERAPEUTA",
        cbos: "223605",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104062",
        description: "CONSULTA COM TERAPEUTA OCUPACIONAL",
        cbos: "223905",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10104070",
        description: "CONSULTA COM ENFERMEIRO",
        cbos: "223505",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10105018",
        description: "CONSULTA/AVALIAÇÃO PRÉ-ANESTÉSICA",
        cbos: "225151",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10106014",
        description: "TELECONSULTA MÉDICA (QUALQUER ESPECIALIDADE)",
        cbos: "-",
        category: CONSULTAS,
    },
    TussRecord {
        code: "10106022",
        description: "TELECONSULTA COM PSICÓLOGO",
        cbos: "251510",
        category: CONSULTAS,
    },
];
