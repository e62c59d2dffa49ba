//! Source rows for the private data dictionary. Each row is
//! `(key, VR, VM, name)` where the key is `(GGGG,"CREATOR",EE)` and `EE` is the
//! low byte of the element within its reserved private block.

#[rustfmt::skip]
pub(super) static PRIVATE_ENTRIES: &[(&str, &str, &str, &str)] = &[
  ("(0009,\"GEMS_IDEN_01\",01)", "LO", "1", "FullFidelity"),
  ("(0009,\"GEMS_IDEN_01\",02)", "SH", "1", "SuiteId"),
  ("(0009,\"GEMS_IDEN_01\",04)", "SH", "1", "ProductId"),
  ("(0009,\"GEMS_IDEN_01\",30)", "SH", "1", "ServiceId"),
  ("(0009,\"GEMS_IDEN_01\",31)", "SH", "1", "MobileLocationNumber"),
  ("(0009,\"GEMS_IDEN_01\",E3)", "UI", "1", "EquipmentUID"),
  ("(0009,\"GEMS_IDEN_01\",E6)", "SH", "1", "GenesisVersionNow"),
  ("(0009,\"GEMS_IDEN_01\",E7)", "UL", "1", "ExamRecordChecksum"),

  ("(0019,\"GEMS_ACQU_01\",23)", "DS", "1", "TableSpeed"),
  ("(0019,\"GEMS_ACQU_01\",24)", "DS", "1", "MidScanTime"),
  ("(0019,\"GEMS_ACQU_01\",27)", "DS", "1", "RotationSpeed"),

  ("(0019,\"SIEMENS MR HEADER\",0A)", "US", "1", "NumberOfImagesInMosaic"),
  ("(0019,\"SIEMENS MR HEADER\",0B)", "DS", "1", "SliceMeasurementDuration"),
  ("(0019,\"SIEMENS MR HEADER\",0C)", "IS", "1", "BValue"),
  ("(0019,\"SIEMENS MR HEADER\",0D)", "CS", "1", "DiffusionDirectionality"),
  ("(0019,\"SIEMENS MR HEADER\",0E)", "FD", "3", "DiffusionGradientDirection"),
  ("(0019,\"SIEMENS MR HEADER\",0F)", "SH", "1", "GradientMode"),
  ("(0019,\"SIEMENS MR HEADER\",11)", "SH", "1", "FlowCompensation"),
  ("(0019,\"SIEMENS MR HEADER\",12)", "SL", "3", "TablePositionOrigin"),
  ("(0019,\"SIEMENS MR HEADER\",13)", "SL", "3", "ImaAbsTablePosition"),
  ("(0019,\"SIEMENS MR HEADER\",14)", "IS", "3", "ImaRelTablePosition"),
  ("(0019,\"SIEMENS MR HEADER\",15)", "FD", "3", "SlicePositionPCS"),
  ("(0019,\"SIEMENS MR HEADER\",16)", "DS", "1", "TimeAfterStart"),
  ("(0019,\"SIEMENS MR HEADER\",17)", "DS", "1", "SliceResolution"),
  ("(0019,\"SIEMENS MR HEADER\",18)", "IS", "1", "RealDwellTime"),
  ("(0019,\"SIEMENS MR HEADER\",27)", "FD", "6", "BMatrix"),
  ("(0019,\"SIEMENS MR HEADER\",28)", "FD", "1", "BandwidthPerPixelPhaseEncode"),
  ("(0019,\"SIEMENS MR HEADER\",29)", "FD", "1-n", "MosaicRefAcqTimes"),

  ("(0029,\"SIEMENS CSA HEADER\",08)", "CS", "1", "CSAImageHeaderType"),
  ("(0029,\"SIEMENS CSA HEADER\",09)", "LO", "1", "CSAImageHeaderVersion"),
  ("(0029,\"SIEMENS CSA HEADER\",10)", "OB", "1", "CSAImageHeaderInfo"),
  ("(0029,\"SIEMENS CSA HEADER\",18)", "CS", "1", "CSASeriesHeaderType"),
  ("(0029,\"SIEMENS CSA HEADER\",19)", "LO", "1", "CSASeriesHeaderVersion"),
  ("(0029,\"SIEMENS CSA HEADER\",20)", "OB", "1", "CSASeriesHeaderInfo"),

  ("(0043,\"GEMS_PARM_01\",01)", "SS", "1", "BitmapOfPrescanOptions"),
  ("(0043,\"GEMS_PARM_01\",02)", "SS", "1", "GradientOffsetInX"),
  ("(0043,\"GEMS_PARM_01\",03)", "SS", "1", "GradientOffsetInY"),
  ("(0043,\"GEMS_PARM_01\",04)", "SS", "1", "GradientOffsetInZ"),
  ("(0043,\"GEMS_PARM_01\",05)", "SS", "1", "ImageIsOriginal"),
  ("(0043,\"GEMS_PARM_01\",06)", "SS", "1", "NumberOfEPIShots"),
  ("(0043,\"GEMS_PARM_01\",07)", "SS", "1", "ViewsPerSegment"),
  ("(0043,\"GEMS_PARM_01\",08)", "SS", "1", "RespiratoryRateInBPM"),
  ("(0043,\"GEMS_PARM_01\",09)", "SS", "1", "RespiratoryTriggerPoint"),
  ("(0043,\"GEMS_PARM_01\",0A)", "SS", "1", "TypeOfReceiverUsed"),
  ("(0043,\"GEMS_PARM_01\",0B)", "DS", "1", "PeakRateOfChangeOfGradientField"),
  ("(0043,\"GEMS_PARM_01\",0C)", "DS", "1", "LimitsInUnitsOfPercent"),
  ("(0043,\"GEMS_PARM_01\",0D)", "DS", "1", "PSDEstimatedLimit"),
  ("(0043,\"GEMS_PARM_01\",0E)", "DS", "1", "PSDEstimatedLimitInTeslaPerSecond"),
  ("(0043,\"GEMS_PARM_01\",0F)", "DS", "1", "SARAvgHead"),
  ("(0043,\"GEMS_PARM_01\",27)", "SH", "1", "ScanPitchRatio"),
  ("(0043,\"GEMS_PARM_01\",39)", "IS", "4", "SlopInt6To9"),

  ("(2001,\"Philips Imaging DD 001\",01)", "FL", "1", "ChemicalShift"),
  ("(2001,\"Philips Imaging DD 001\",02)", "IS", "1", "ChemicalShiftNumberMR"),
  ("(2001,\"Philips Imaging DD 001\",03)", "FL", "1", "DiffusionBFactor"),
  ("(2001,\"Philips Imaging DD 001\",04)", "CS", "1", "DiffusionDirection"),
  ("(2001,\"Philips Imaging DD 001\",06)", "CS", "1", "DynamicScan"),
  ("(2001,\"Philips Imaging DD 001\",07)", "FL", "1", "EchoTimeDisplayMR"),
  ("(2001,\"Philips Imaging DD 001\",08)", "IS", "1", "PhaseNumber"),
  ("(2001,\"Philips Imaging DD 001\",0A)", "IS", "1", "SliceNumberMR"),
  ("(2001,\"Philips Imaging DD 001\",10)", "CS", "1", "CardiacSync"),
  ("(2001,\"Philips Imaging DD 001\",11)", "FL", "1", "DiffusionEchoTime"),
  ("(2001,\"Philips Imaging DD 001\",12)", "CS", "1", "DynamicSeries"),
  ("(2001,\"Philips Imaging DD 001\",13)", "SL", "1", "EPIFactor"),
  ("(2001,\"Philips Imaging DD 001\",14)", "SL", "1", "NumberOfEchoesMR"),
  ("(2001,\"Philips Imaging DD 001\",15)", "SS", "1", "NumberOfLocations"),
  ("(2001,\"Philips Imaging DD 001\",16)", "SS", "1", "NumberOfPCDirections"),
  ("(2001,\"Philips Imaging DD 001\",17)", "SL", "1", "NumberOfPhasesMR"),
  ("(2001,\"Philips Imaging DD 001\",18)", "SL", "1", "NumberOfSlicesMR"),
  ("(2001,\"Philips Imaging DD 001\",19)", "CS", "1", "PartialMatrixScanned"),
  ("(2001,\"Philips Imaging DD 001\",1A)", "FL", "1-n", "PCVelocity"),
  ("(2001,\"Philips Imaging DD 001\",1B)", "FL", "1", "PrepulseDelay"),
  ("(2001,\"Philips Imaging DD 001\",1C)", "CS", "1", "PrepulseType"),
  ("(2001,\"Philips Imaging DD 001\",1D)", "IS", "1", "ReconstructionNumberMR"),
  ("(2001,\"Philips Imaging DD 001\",1F)", "CS", "1", "RespirationSync"),
  ("(2001,\"Philips Imaging DD 001\",21)", "CS", "1", "SPIR"),
  ("(2001,\"Philips Imaging DD 001\",22)", "FL", "1", "WaterFatShift"),
  ("(2001,\"Philips Imaging DD 001\",25)", "SH", "1", "EchoTimeDisplay"),
  ("(2001,\"Philips Imaging DD 001\",2D)", "SS", "1", "NumberOfStackSlices"),
  ("(2001,\"Philips Imaging DD 001\",32)", "FL", "1", "StackRadialAngle"),
  ("(2001,\"Philips Imaging DD 001\",33)", "CS", "1", "StackRadialAxis"),
  ("(2001,\"Philips Imaging DD 001\",35)", "SS", "1", "StackSliceNumber"),
  ("(2001,\"Philips Imaging DD 001\",36)", "CS", "1", "StackType"),
  ("(2001,\"Philips Imaging DD 001\",5F)", "SQ", "1", "StackSequence"),
  ("(2001,\"Philips Imaging DD 001\",60)", "SL", "1", "NumberOfStacks"),
  ("(2001,\"Philips Imaging DD 001\",63)", "CS", "1", "ExaminationSource"),

  ("(2005,\"Philips MR Imaging DD 001\",0D)", "FL", "1", "ScaleIntercept"),
  ("(2005,\"Philips MR Imaging DD 001\",0E)", "FL", "1", "ScaleSlope"),
];
