use crate::models::categorias::PROCEDIMENTOS_CLINICOS;
use crate::models::record::TussRecord;

pub const PROCEDIMENTOS_CLINICOS_TUSS: &[TussRecord] = &[
    TussRecord {
        code: "20101015",
        description: "ACONSELHAMENTO GENÉTICO",
        cbos: "225148",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20101023",
        description: "ATENDIMENTO AO RECÉM-NASCIDO EM BERÇÁRIO",
        cbos: "225124",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20101031",
        description: "ATENDIMENTO AO RECÉM-NASCIDO EM SALA DE PARTO (PARTO NORMAL OU OPERATÓRIO)",
        cbos: "225124",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20101040",
        description: "ATENDIMENTO PEDIÁTRICO A GEMELARES (POR RECÉM-NASCIDO)",
        cbos: "225124",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20102011",
        description: "ASSISTÊNCIA FISIÁTRICA RESPIRATÓRIA EM DOENTE CLÍNICO INTERNADO",
        cbos: "225160",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20102020",
        description: "ATENDIMENTO FISIÁTRICO NO PRÉ E PÓS-OPERATÓRIO",
        cbos: "225160",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20103018",
        description: "ATENDIMENTO DO INTENSIVISTA DIARISTA (PLANTÃO DE 12 HORAS)",
        cbos: "225150",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20103026",
        description: "ATENDIMENTO MÉDICO DO INTENSIVISTA EM UTI GERAL OU PEDIÁTRICA (PLANTÃO DE 12 HORAS)",
        cbos: "225150",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20103034",
        description: "ATENDIMENTO MÉDICO DO INTENSIVISTA EM UTI NEONATAL (PLANTÃO DE 12 HORAS)",
        cbos: "225150",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20104014",
        description: "ACOMPANHAMENTO CLÍNICO AMBULATORIAL PÓS-TRANSPLANTE RENAL (POR AVALIAÇÃO)",
        cbos: "225109",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20104022",
        description: "ACOMPANHAMENTO CLÍNICO AMBULATORIAL PÓS-TRANSPLANTE DE MEDULA ÓSSEA",
        cbos: "225185",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20201010",
        description: "SESSÃO DE PSICOTERAPIA INDIVIDUAL",
        cbos: "251510",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20201028",
        description: "SESSÃO DE PSICOTERAPIA DE GRUPO (POR PACIENTE)",
        cbos: "251510",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20201036",
        description: "SESSÃO DE PSICOTERAPIA DE CASAL OU FAMÍLIA",
        cbos: "251510",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20201044",
        description: "TESTE DE AVALIAÇÃO NEUROPSICOLÓGICA",
        cbos: "251510",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20202016",
        description: "SESSÃO DE FONOTERAPIA INDIVIDUAL",
        cbos: "223810",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20202024",
        description: "AVALIAÇÃO FONOAUDIOLÓGICA DA LINGUAGEM ORAL E ESCRITA",
        cbos: "223810",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20203012",
        description: "SESSÃO DE FISIOTERAPIA MOTORA",
        cbos: "223605",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20203020",
        description: "SESSÃO DE FISIOTERAPIA RESPIRATÓRIA",
        cbos: "223605",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20203039",
        description: "SESSÃO DE REEDUCAÇÃO POSTURAL GLOBAL (RPG)",
        cbos: "223605",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20203047",
        description: "SESSÃO DE HIDROTERAPIA",
        cbos: "223605",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20204019",
        description: "SESSÃO DE TERAPIA OCUPACIONAL INDIVIDUAL",
        cbos: "223905",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20205015",
        description: "ATENDIMENTO NUTRICIONAL AMBULATORIAL (POR SESSÃO)",
        cbos: "223710",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20301012",
        description: "SESSÃO DE ACUPUNTURA COM AGULHAS",
        cbos: "225105",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20301020",
        description: "SESSÃO DE ACUPUNTURA COM ESTÍMULO ELÉTRICO OU LASER",
        cbos: "225105",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20302019",
        description: "SESSÃO DE ELETROCONVULSOTERAPIA (EM SALA COM ANESTESISTA)",
        cbos: "225133",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20302027",
        description: "ATENDIMENTO EM HOSPITAL-DIA PSIQUIÁTRICO (POR DIA)",
        cbos: "225133",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20401016",
        description: "HEMODIÁLISE CRÔNICA (POR SESSÃO)",
        cbos: "225109",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20401024",
        description: "HEMODIÁLISE CONTÍNUA (POR 12 HORAS)",
        cbos: "225109",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20401032",
        description: "DIÁLISE PERITONEAL AMBULATORIAL CONTÍNUA (CAPD) - POR MÊS",
        cbos: "225109",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20401040",
        description: "DIÁLISE PERITONEAL AUTOMÁTICA (APD) - POR MÊS",
        cbos: "225109",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20402012",
        description: "QUIMIOTERAPIA AMBULATORIAL - PLANEJAMENTO E 1º DIA DE TRATAMENTO",
        cbos: "225121",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20402020",
        description: "QUIMIOTERAPIA AMBULATORIAL - POR DIA SUBSEQUENTE DE TRATAMENTO",
        cbos: "225121",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20402039",
        description: "QUIMIOTERAPIA INTRATECAL OU INTRA-ARTERIAL (POR SESSÃO)",
        cbos: "225121",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20403010",
        description: "RADIOTERAPIA CONFORMACIONAL TRIDIMENSIONAL - PLANEJAMENTO",
        cbos: "225325",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20403028",
        description: "RADIOTERAPIA CONVENCIONAL - POR CAMPO",
        cbos: "225325",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20403036",
        description: "BRAQUITERAPIA DE ALTA TAXA DE DOSE (POR INSERÇÃO)",
        cbos: "225325",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20404017",
        description: "FOTOTERAPIA COM UVA (PUVA) - POR SESSÃO",
        cbos: "225135",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20404025",
        description: "FOTOTERAPIA COM UVB DE BANDA ESTREITA - POR SESSÃO",
        cbos: "225135",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20501011",
        description: "IMUNOTERAPIA ESPECÍFICA - PLANEJAMENTO TÉCNICO (POR ANO)",
        cbos: "225110",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20501020",
        description: "TESTE CUTÂNEO DE LEITURA IMEDIATA (ATÉ 25 ANTÍGENOS)",
        cbos: "225110",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20501038",
        description: "TESTE DE CONTATO (PATCH TEST) - ATÉ 30 SUBSTÂNCIAS",
        cbos: "225135",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20601013",
        description: "CARDIOVERSÃO ELÉTRICA ELETIVA (AVALIAÇÃO CLÍNICA, ELETROCARDIOGRÁFICA E DESFIBRILAÇÃO)",
        cbos: "225120",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20601021",
        description: "REABILITAÇÃO CARDÍACA SUPERVISIONADA (POR SESSÃO)",
        cbos: "225120",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20701010",
        description: "OXIGENOTERAPIA HIPERBÁRICA (POR SESSÃO)",
        cbos: "-",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20701028",
        description: "INALAÇÃO/NEBULIZAÇÃO (POR SESSÃO)",
        cbos: "-",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20801017",
        description: "SANGRIA TERAPÊUTICA",
        cbos: "225185",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20801025",
        description: "TRANSFUSÃO DE HEMOCOMPONENTES (POR UNIDADE)",
        cbos: "225185",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20801033",
        description: "AFÉRESE TERAPÊUTICA (POR SESSÃO)",
        cbos: "225185",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20901014",
        description: "PUNÇÃO LOMBAR DIAGNÓSTICA OU TERAPÊUTICA",
        cbos: "225112",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20901022",
        description: "BLOQUEIO NEUROMUSCULAR COM TOXINA BOTULÍNICA (POR MEMBRO)",
        cbos: "225112",
        category: PROCEDIMENTOS_CLINICOS,
    },
    TussRecord {
        code: "20901030",
        description: "INFILTRAÇÃO ARTICULAR OU PERIARTICULAR",
        cbos: "225136",
        category: PROCEDIMENTOS_CLINICOS,
    },
];
