use crate::models::categorias::OUTROS;
use crate::models::record::TussRecord;

// Administrative rows from the source table. Some are instructional text
// rather than procedures, and the CBOS field shows up as "-", empty,
// "0"/"1" or "SP"; everything is kept as it came.
pub const OUTROS_TUSS: &[TussRecord] = &[
    TussRecord {
        code: "60000015",
        description: "DIÁRIA DE ENFERMARIA",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "60000023",
        description: "DIÁRIA DE APARTAMENTO",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "60000031",
        description: "DIÁRIA DE UTI ADULTO",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "60000040",
        description: "DIÁRIA DE UTI NEONATAL",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "60001011",
        description: "TAXA DE SALA CIRÚRGICA (POR PORTE)",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "60001020",
        description: "TAXA DE SALA DE RECUPERAÇÃO PÓS-ANESTÉSICA (POR HORA)",
        cbos: "",
        category: OUTROS,
    },
    TussRecord {
        code: "60002018",
        description: "TAXA DE OBSERVAÇÃO EM PRONTO SOCORRO (ATÉ 6 HORAS)",
        cbos: "",
        category: OUTROS,
    },
    TussRecord {
        code: "70000010",
        description: "MATERIAIS DESCARTÁVEIS UTILIZADOS EM PROCEDIMENTO (CONFORME NOTA)",
        cbos: "0",
        category: OUTROS,
    },
    TussRecord {
        code: "70000028",
        description: "ÓRTESES, PRÓTESES E MATERIAIS ESPECIAIS (OPME) - MEDIANTE AUTORIZAÇÃO",
        cbos: "1",
        category: OUTROS,
    },
    TussRecord {
        code: "90000019",
        description: "MEDICAMENTOS UTILIZADOS EM REGIME AMBULATORIAL (CONFORME PRESCRIÇÃO)",
        cbos: "0",
        category: OUTROS,
    },
    TussRecord {
        code: "91000014",
        description: "REMOÇÃO INTER-HOSPITALAR EM AMBULÂNCIA SIMPLES (POR KM RODADO)",
        cbos: "SP",
        category: OUTROS,
    },
    TussRecord {
        code: "91000022",
        description: "REMOÇÃO INTER-HOSPITALAR EM UTI MÓVEL (POR KM RODADO)",
        cbos: "SP",
        category: OUTROS,
    },
    TussRecord {
        code: "980010",
        description: "CÓDIGO DE AJUSTE DE FATURAMENTO (USO INTERNO DA OPERADORA)",
        cbos: "",
        category: OUTROS,
    },
    TussRecord {
        code: "98001010",
        description: "ATENÇÃO: OS CÓDIGOS DESTA SEÇÃO EXIGEM AUTORIZAÇÃO PRÉVIA DA OPERADORA",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "98001029",
        description: "Observação: utilizar os códigos de remoção somente quando houver guia emitida",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "99000011",
        description: "PACOTE DE PEQUENA CIRURGIA AMBULATORIAL (INCLUI TAXAS E MATERIAIS)",
        cbos: "-",
        category: OUTROS,
    },
    TussRecord {
        code: "99000020",
        description: "PACOTE DE PARTO NORMAL (HONORÁRIOS, DIÁRIAS E TAXAS)",
        cbos: "-",
        category: OUTROS,
    },
];
